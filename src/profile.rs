//! Per-user account metadata, as stored in the service's `profiles` relation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single profile row of a user identity, created by the service at
/// signup. `full_name` is the only field this application may change;
/// `email` is displayed read-only and can only change through the identity
/// service itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Matches the session identity
    id: Uuid,
    #[serde(default)]
    full_name: String,
    email: String,
}

impl Profile {
    pub fn new<S: ToString, T: ToString>(id: Uuid, full_name: S, email: T) -> Self {
        Self {
            id,
            full_name: full_name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_full_name<T: ToString>(&mut self, full_name: T) {
        self.full_name = full_name.to_string();
    }
}
