//! Support for library configuration options

use std::env;
use std::error::Error;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use url::Url;

/// The client identity sent to the service with every request (`X-Client-Info` header).
/// Feel free to override it when initing this library.
pub static CLIENT_INFO: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new(format!("taskflow-rust/{}", env!("CARGO_PKG_VERSION")))));

/// Returns the current `X-Client-Info` value
pub fn client_info() -> String {
    CLIENT_INFO.lock().unwrap().clone()
}

/// Where the hosted service lives, and the public API key that identifies this
/// application to it.
///
/// The API key is not a secret and does not authenticate a user; user identity
/// comes from the bearer token of a [`Session`](crate::Session).
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    base_url: Url,
    api_key: String,
}

impl ServiceConfig {
    pub fn new<S: AsRef<str>, T: ToString>(base_url: S, api_key: T) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Read the service location from `TASKFLOW_URL` and `TASKFLOW_API_KEY`
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let url = env::var("TASKFLOW_URL")?;
        let api_key = env::var("TASKFLOW_API_KEY")?;
        Self::new(url, api_key)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The endpoint of a table of the hosted data service
    pub fn rest_url(&self, table: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/rest/v1/{}", table));
        url
    }

    /// An endpoint of the hosted identity service
    pub fn auth_url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/auth/v1/{}", endpoint));
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let config = ServiceConfig::new("https://project.example.com", "public-key").unwrap();
        assert_eq!(config.rest_url("tasks").as_str(), "https://project.example.com/rest/v1/tasks");
        assert_eq!(config.auth_url("token").as_str(), "https://project.example.com/auth/v1/token");
        assert_eq!(config.api_key(), "public-key");
    }
}
