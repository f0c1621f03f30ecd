//! The error taxonomy shared by every remote operation
//!
//! Errors are terminal for the operation that triggered them only: a failed
//! call never tears down a view, and nothing is retried automatically.

use thiserror::Error;

/// Why an operation could not run under the current identity.
///
/// Callers are expected to translate any of these into a redirect to the
/// login surface (see [`Route::fallback`](crate::Route::fallback)).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No session is present in the [`SessionContext`](crate::SessionContext)
    #[error("no active session")]
    NotSignedIn,
    /// A session is present but its expiry has passed
    #[error("the session has expired")]
    SessionExpired,
    /// The identity service refused to sign in an account whose email address
    /// has not been confirmed yet
    #[error("email address not confirmed yet")]
    EmailNotConfirmed,
    /// The identity service rejected the request, with its reported reason
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The remote call failed. Carries the message the service reported,
    /// which is what views surface to the user
    #[error("{0}")]
    Request(String),
    /// A required form field was left empty. The only client-side rule;
    /// everything else is validated by the service
    #[error("{0} is required")]
    Validation(&'static str),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
