//! Password authentication against the hosted identity service
//!
//! Successful sign-ins are published to the [`SessionContext`], so every view
//! holding a handle to the context observes the change; nothing here talks to
//! views directly.

use chrono::Utc;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::{client_info, ServiceConfig};
use crate::error::{AuthError, Result};
use crate::session::{Session, SessionContext};

/// Shape of a successful token-endpoint answer
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

#[derive(Deserialize)]
struct AuthUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

/// Client for the identity service
pub struct AuthClient {
    http: reqwest::Client,
    config: ServiceConfig,
    context: SessionContext,
}

impl AuthClient {
    pub fn new(config: ServiceConfig, context: SessionContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            context,
        }
    }

    /// The context this client publishes into
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header("apikey", self.config.api_key())
            .header("X-Client-Info", client_info())
    }

    /// Exchange credentials for a session and publish it.
    ///
    /// An account whose email address has not been confirmed yet is reported
    /// as [`AuthError::EmailNotConfirmed`], so callers can offer a
    /// [`resend_confirmation`](Self::resend_confirmation).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let mut url = self.config.auth_url("token");
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            if body.contains("not confirmed") {
                return Err(AuthError::EmailNotConfirmed.into());
            }
            return Err(AuthError::Rejected(auth_message(&body)).into());
        }

        let token: TokenResponse = response.json().await?;
        let expires_at = token
            .expires_in
            .map(|seconds| Utc::now() + chrono::Duration::seconds(seconds));
        let session = Session::new(
            token.access_token,
            token.user.id,
            token.user.email.unwrap_or_default(),
            expires_at,
        );

        self.context.set(Some(session.clone()));
        log::info!("Signed in as {}", session.email());
        Ok(session)
    }

    /// Register a new account. The service sends a confirmation email and
    /// creates the profile row; no session exists until the first sign-in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .post(self.config.auth_url("signup"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected(auth_message(&body)).into());
        }
        log::info!("Signed up {}, confirmation email pending", email);
        Ok(())
    }

    /// Ask the service to send the signup confirmation email again
    pub async fn resend_confirmation(&self, email: &str) -> Result<()> {
        let response = self
            .post(self.config.auth_url("resend"))
            .json(&serde_json::json!({ "type": "signup", "email": email }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected(auth_message(&body)).into());
        }
        Ok(())
    }

    /// Sign out.
    ///
    /// The context is cleared first: every view treats a cleared context as
    /// signed out, whether or not the remote revocation goes through. The
    /// revocation itself is best-effort.
    pub async fn sign_out(&self) {
        let previous = self.context.current();
        self.context.set(None);

        if let Some(session) = previous {
            let result = self
                .post(self.config.auth_url("logout"))
                .bearer_auth(session.access_token())
                .send()
                .await;
            match result {
                Ok(_) => log::info!("Signed out {}", session.email()),
                Err(err) => log::warn!("Could not revoke the session remotely: {}", err),
            }
        }
    }
}

/// The identity service reports errors under a few different keys
fn auth_message(body: &str) -> String {
    #[derive(Deserialize, Default)]
    struct AuthErrorBody {
        error_description: Option<String>,
        msg: Option<String>,
        message: Option<String>,
    }

    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_messages_prefer_the_description() {
        let body = r#"{"error_description": "Invalid login credentials"}"#;
        assert_eq!(auth_message(body), "Invalid login credentials");
        assert_eq!(auth_message("plain text"), "plain text");
    }

    #[test]
    fn token_response_deserializes() {
        let body = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {"id": "f3f2a6be-31a1-44d5-a6ce-5f0d5f6f3c11", "email": "someone@example.com"}
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "jwt-token");
        assert_eq!(token.expires_in, Some(3600));
        assert_eq!(token.user.email.as_deref(), Some("someone@example.com"));
    }
}
