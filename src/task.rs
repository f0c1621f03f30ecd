//! User-owned tasks, as stored in the service's `tasks` relation

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::Error;
use crate::project::ProjectRef;

pub type TaskId = Uuid;

/// How urgent a task is. Drives a display badge, nothing schedules on it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    /// The new-task form preselects `medium`
    fn default() -> Self {
        Priority::Medium
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A task row.
///
/// Every task is owned by exactly one user identity; the service only ever
/// hands back rows belonging to the authenticated identity, so this type never
/// has to check ownership itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: Uuid,
    title: String,
    #[serde(default)]
    description: String,
    priority: Priority,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<Url>,
    archived: bool,
    created_at: DateTime<Utc>,
    /// The embedded read-only project reference, present when rows are
    /// selected together with their project name
    #[serde(default, rename = "projects", skip_serializing_if = "Option::is_none")]
    project: Option<ProjectRef>,
}

impl Task {
    /// Build the row the service would store for this draft: owned by
    /// `user_id`, lifecycle defaults applied, creation stamped now
    pub fn from_draft(draft: TaskDraft, user_id: Uuid) -> Self {
        Self::new_with_parameters(
            Uuid::new_v4(),
            user_id,
            draft.title,
            draft.description,
            draft.priority,
            TaskStatus::Pending,
            draft.due_date,
            draft.link,
            false,
            None,
            Utc::now(),
        )
    }

    /// Create a Task instance from every stored column
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_parameters(
        id: TaskId,
        user_id: Uuid,
        title: String,
        description: String,
        priority: Priority,
        status: TaskStatus,
        due_date: Option<DateTime<Utc>>,
        link: Option<Url>,
        archived: bool,
        project: Option<ProjectRef>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            priority,
            status,
            due_date,
            link,
            archived,
            created_at,
            project,
        }
    }

    pub fn id(&self) -> TaskId           { self.id }
    pub fn user_id(&self) -> Uuid        { self.user_id }
    pub fn title(&self) -> &str          { &self.title }
    pub fn description(&self) -> &str    { &self.description }
    pub fn priority(&self) -> Priority   { self.priority }
    pub fn status(&self) -> TaskStatus   { self.status }
    pub fn archived(&self) -> bool       { self.archived }
    pub fn link(&self) -> Option<&Url>   { self.link.as_ref() }
    pub fn created_at(&self) -> &DateTime<Utc>        { &self.created_at }
    pub fn due_date(&self) -> Option<&DateTime<Utc>>  { self.due_date.as_ref() }
    pub fn project(&self) -> Option<&ProjectRef>      { self.project.as_ref() }

    pub fn completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Apply a partial update, the way the service applies an update-by-filter
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
    }
}

/// The new-task form fields.
///
/// Everything the dashboard lets a user type in. Ownership and the lifecycle
/// defaults (`pending`, not archived) are attached by the store at insert time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Url>,
}

impl TaskDraft {
    /// The only client-side rule: required fields must be filled
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("title"));
        }
        Ok(())
    }
}

/// A partial update, matching the service's update-by-filter call
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl TaskPatch {
    /// The patch behind the "complete" action
    pub fn complete() -> Self {
        Self {
            status: Some(TaskStatus::Completed),
            ..Self::default()
        }
    }

    /// The patch behind the "archive" action
    pub fn archive() -> Self {
        Self {
            archived: Some(true),
            ..Self::default()
        }
    }
}

/// Which task rows to fetch, and in which order
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    /// `Some(false)` for the active list, `Some(true)` for the archive,
    /// `None` for every row
    pub archived: Option<bool>,
    pub order: TaskOrder,
}

impl TaskFilter {
    /// The task list view: non-archived rows, newest first
    pub fn active() -> Self {
        Self {
            archived: Some(false),
            order: TaskOrder::CreatedAtDesc,
        }
    }

    /// The archive view: archived rows, newest first
    pub fn archived_only() -> Self {
        Self {
            archived: Some(true),
            order: TaskOrder::CreatedAtDesc,
        }
    }

    /// The calendar view: every row, by due date
    pub fn all_by_due_date() -> Self {
        Self {
            archived: None,
            order: TaskOrder::DueDateAsc,
        }
    }

    /// The dashboard summary: every row, newest first
    pub fn all_recent_first() -> Self {
        Self {
            archived: None,
            order: TaskOrder::CreatedAtDesc,
        }
    }

    /// Whether a row passes this filter (ordering aside)
    pub fn matches(&self, task: &Task) -> bool {
        match self.archived {
            None => true,
            Some(archived) => task.archived() == archived,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskOrder {
    CreatedAtDesc,
    DueDateAsc,
}

impl Default for TaskOrder {
    fn default() -> Self {
        TaskOrder::CreatedAtDesc
    }
}

impl TaskOrder {
    /// The value of the service's `order` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            TaskOrder::CreatedAtDesc => "created_at.desc",
            TaskOrder::DueDateAsc => "due_date.asc",
        }
    }

    /// Sort rows the way the service would.
    /// Rows without a due date sort last in the by-due-date order.
    pub fn sort(&self, tasks: &mut Vec<Task>) {
        match self {
            TaskOrder::CreatedAtDesc => {
                tasks.sort_by(|a, b| b.created_at().cmp(a.created_at()));
            }
            TaskOrder::DueDateAsc => {
                tasks.sort_by(|a, b| match (a.due_date(), b.due_date()) {
                    (Some(a), Some(b)) => a.cmp(b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
            }
        }
    }
}
