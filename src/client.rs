//! This module provides a client to connect to the hosted task service
//!
//! The service exposes a tabular REST interface: reads take `column=eq.value`
//! filters and an `order=column.direction` parameter, inserts can return the
//! stored representation, updates and deletes are filtered the same way as
//! reads. Row-level access control happens server-side, keyed by the bearer
//! token; this client only forwards the token, it never filters by user
//! itself.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::config::{client_info, ServiceConfig};
use crate::error::{AuthError, Error, Result};
use crate::profile::Profile;
use crate::session::Session;
use crate::task::{Task, TaskDraft, TaskFilter, TaskId, TaskPatch};
use crate::traits::TaskStore;

/// A [`TaskStore`] that reads and writes rows through the hosted service
pub struct Client {
    http: reqwest::Client,
    config: ServiceConfig,
}

/// The row shape of an insert: the draft fields plus the owning identity
#[derive(Serialize)]
struct NewTaskRow {
    user_id: Uuid,
    #[serde(flatten)]
    fields: TaskDraft,
}

/// The error body shapes the service answers with
#[derive(Deserialize, Default)]
struct ServiceMessage {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

impl Client {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn table_url(&self, table: &str) -> Url {
        self.config.rest_url(table)
    }

    /// Attach the service headers and run the request
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        session: &Session,
    ) -> Result<reqwest::Response> {
        let response = request
            .header("apikey", self.config.api_key())
            .header("X-Client-Info", client_info())
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(session.access_token())
            .send()
            .await?;
        error_for_response(response).await
    }
}

/// Pass successful responses through; distill failed ones into the taxonomy
async fn error_for_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AuthError::SessionExpired.into());
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Request(distill_message(status, &body)))
}

/// The service reports errors as JSON with one of a few message keys.
/// Fall back to the raw body when the shape is unexpected.
fn distill_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: ServiceMessage = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .unwrap_or_else(|| body.to_string());
    format!("HTTP {}: {}", status.as_u16(), message)
}

#[async_trait]
impl TaskStore for Client {
    async fn list_tasks(&self, session: &Session, filter: TaskFilter) -> Result<Vec<Task>> {
        let mut url = self.table_url("tasks");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*,projects(name)");
            if let Some(archived) = filter.archived {
                query.append_pair("archived", &format!("eq.{}", archived));
            }
            query.append_pair("order", filter.order.query_value());
        }

        let response = self.send(self.http.get(url.clone()), session).await?;
        let tasks: Vec<Task> = response.json().await?;
        log::debug!("Fetched {} task row(s) from {}", tasks.len(), url.path());
        Ok(tasks)
    }

    async fn insert_task(&self, session: &Session, draft: TaskDraft) -> Result<Task> {
        let row = NewTaskRow {
            user_id: session.user_id(),
            fields: draft,
        };

        let request = self
            .http
            .post(self.table_url("tasks"))
            .header("Prefer", "return=representation")
            .json(&[row]);
        let response = self.send(request, session).await?;

        // The service answers an insert with the array of stored rows
        let mut rows: Vec<Task> = response.json().await?;
        rows.pop()
            .ok_or_else(|| Error::Request("the insert returned no row".to_string()))
    }

    async fn update_task(&self, session: &Session, id: TaskId, patch: TaskPatch) -> Result<()> {
        let mut url = self.table_url("tasks");
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));

        self.send(self.http.patch(url).json(&patch), session).await?;
        Ok(())
    }

    async fn delete_task(&self, session: &Session, id: TaskId) -> Result<()> {
        let mut url = self.table_url("tasks");
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", id));

        self.send(self.http.delete(url), session).await?;
        Ok(())
    }

    async fn get_profile(&self, session: &Session) -> Result<Profile> {
        let mut url = self.table_url("profiles");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            query.append_pair("id", &format!("eq.{}", session.user_id()));
        }

        let response = self.send(self.http.get(url), session).await?;
        let mut rows: Vec<Profile> = response.json().await?;
        rows.pop()
            .ok_or_else(|| Error::Request("no profile row for this identity".to_string()))
    }

    async fn update_profile(&self, session: &Session, full_name: &str) -> Result<()> {
        let mut url = self.table_url("profiles");
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{}", session.user_id()));

        let body = serde_json::json!({ "full_name": full_name });
        self.send(self.http.patch(url).json(&body), session).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distills_the_service_message() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        let distilled = distill_message(status, r#"{"message": "null value in column \"title\""}"#);
        assert_eq!(distilled, "HTTP 400: null value in column \"title\"");
    }

    #[test]
    fn falls_back_to_the_raw_body() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        let distilled = distill_message(status, "gateway exploded");
        assert_eq!(distilled, "HTTP 500: gateway exploded");
    }

    #[test]
    fn new_rows_carry_the_owner_and_the_draft_fields() {
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            description: "Semi-skimmed".to_string(),
            ..TaskDraft::default()
        };
        let user_id = Uuid::new_v4();
        let row = NewTaskRow {
            user_id,
            fields: draft,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["user_id"], serde_json::json!(user_id));
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["priority"], "medium");
        assert!(json.get("due_date").is_none());
    }
}
