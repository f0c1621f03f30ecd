//! The live authenticated-identity context
//!
//! There is a single [`SessionContext`] per process, injected into every view.
//! Interested parties call [`SessionContext::subscribe`] and hold on to the
//! returned watcher; dropping the watcher is the unsubscription, so a torn-down
//! view can never be called back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AuthError;

/// An authenticated identity, as issued by the identity service.
///
/// Held in memory only, never persisted by this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    access_token: String,
    user_id: Uuid,
    email: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new<S: ToString, T: ToString>(
        access_token: S,
        user_id: Uuid,
        email: T,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token: access_token.to_string(),
            user_id,
            email: email.to_string(),
            expires_at,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            None => false,
            Some(at) => at <= Utc::now(),
        }
    }
}

/// See [`SessionContext::subscribe`]
pub type SessionWatcher = tokio::sync::watch::Receiver<Option<Session>>;

struct Shared {
    tx: tokio::sync::watch::Sender<Option<Session>>,
    // Keeps the channel open even when no view is currently watching
    _keepalive: SessionWatcher,
}

/// Process-wide session state. Cloning hands out another handle to the same
/// underlying context.
#[derive(Clone)]
pub struct SessionContext {
    shared: Arc<Shared>,
}

impl SessionContext {
    /// Create a context with nobody signed in
    pub fn new() -> Self {
        let (tx, rx) = tokio::sync::watch::channel(None);
        Self {
            shared: Arc::new(Shared { tx, _keepalive: rx }),
        }
    }

    /// The session as currently published, expired or not
    pub fn current(&self) -> Option<Session> {
        self.shared.tx.borrow().clone()
    }

    /// Publish a session change (sign-in, refresh, sign-out)
    pub fn set(&self, session: Option<Session>) {
        // Cannot fail: the context keeps one receiver alive itself
        let _ = self.shared.tx.send(session);
    }

    /// The session every authenticated operation runs under, or the error the
    /// caller should translate into a redirect to the login surface
    pub fn require(&self) -> Result<Session, AuthError> {
        match self.current() {
            None => Err(AuthError::NotSignedIn),
            Some(session) if session.is_expired() => Err(AuthError::SessionExpired),
            Some(session) => Ok(session),
        }
    }

    /// Watch for session changes. Dropping the returned watcher unsubscribes.
    pub fn subscribe(&self) -> SessionWatcher {
        self.shared.tx.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_session() -> Session {
        Session::new("token", Uuid::new_v4(), "someone@example.com", None)
    }

    #[test]
    fn require_without_a_session() {
        let context = SessionContext::new();
        assert_eq!(context.require(), Err(AuthError::NotSignedIn));
    }

    #[test]
    fn require_with_an_expired_session() {
        let context = SessionContext::new();
        let expired = Session::new(
            "token",
            Uuid::new_v4(),
            "someone@example.com",
            Some(Utc::now() - chrono::Duration::minutes(5)),
        );
        context.set(Some(expired));
        assert_eq!(context.require(), Err(AuthError::SessionExpired));
    }

    #[tokio::test]
    async fn watchers_see_sign_in_and_sign_out() {
        let context = SessionContext::new();
        let mut watcher = context.subscribe();

        let session = some_session();
        context.set(Some(session.clone()));
        watcher.changed().await.unwrap();
        assert_eq!(watcher.borrow().as_ref(), Some(&session));

        context.set(None);
        watcher.changed().await.unwrap();
        assert!(watcher.borrow().is_none());
    }

    #[test]
    fn clones_share_the_same_context() {
        let context = SessionContext::new();
        let other = context.clone();
        context.set(Some(some_session()));
        assert!(other.current().is_some());
    }
}
