//! The navigable surfaces and their paths
//!
//! Routes are view attachment points for a frontend, not a protocol: this
//! crate only provides the mapping and the session-gating rule.

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Tasks,
    Archive,
    Calendar,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Tasks => "/dashboard/tasks",
            Route::Archive => "/dashboard/archive",
            Route::Calendar => "/dashboard/calendar",
            Route::Settings => "/dashboard/settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/dashboard" => Some(Route::Dashboard),
            "/dashboard/tasks" => Some(Route::Tasks),
            "/dashboard/archive" => Some(Route::Archive),
            "/dashboard/calendar" => Some(Route::Calendar),
            "/dashboard/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    /// Dashboard surfaces require a live session; the auth surfaces do not
    pub fn requires_session(self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }

    /// Where to send a visitor whose session is missing or expired
    pub fn fallback() -> Self {
        Route::Login
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 7] = [
        Route::Login,
        Route::Signup,
        Route::Dashboard,
        Route::Tasks,
        Route::Archive,
        Route::Calendar,
        Route::Settings,
    ];

    #[test]
    fn paths_round_trip() {
        for route in ALL.iter() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn only_auth_surfaces_are_public() {
        for route in ALL.iter() {
            let public = matches!(route, Route::Login | Route::Signup);
            assert_eq!(route.requires_session(), !public);
        }
    }
}
