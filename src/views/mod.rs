//! View-models for the dashboard surfaces
//!
//! Each view binds a [`TaskStore`](crate::traits::TaskStore) and the
//! process-wide [`SessionContext`](crate::SessionContext). Rendering is out of
//! scope: a view exposes exactly the state a frontend needs to draw, plus the
//! operations the user can trigger.
//!
//! All views share the same lifecycle: they start [`LoadState::Loading`] and
//! reach [`LoadState::Ready`] whether or not the fetch succeeded. A failure
//! additionally surfaces a dismissible [`Notice`] and leaves the last-known
//! data in place (empty on a first load). Nothing is retried automatically;
//! the user re-triggers the action.
//!
//! Operations return `Err` only for authentication problems, which callers
//! should translate into a redirect to the login surface. Every other failure
//! is terminal for that operation alone and shows up as a notice.

pub mod archive;
pub mod calendar;
pub mod dashboard;
pub mod settings;
pub mod tasks;

pub use archive::ArchiveView;
pub use calendar::CalendarView;
pub use dashboard::{DashboardView, TaskSummary};
pub use settings::SettingsView;
pub use tasks::TaskListView;

use crate::task::TaskDraft;

/// Where a view is in its loading lifecycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is outstanding; render indeterminate progress.
    /// This flag follows the real request, there is no simulated timer.
    Loading,
    /// Data (possibly empty) is displayed
    Ready,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        self == LoadState::Loading
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A dismissible user-facing notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    severity: Severity,
    title: String,
    message: String,
}

impl Notice {
    pub fn info<S: ToString, T: ToString>(title: S, message: T) -> Self {
        Self {
            severity: Severity::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error<S: ToString, T: ToString>(title: S, reason: T) -> Self {
        Self {
            severity: Severity::Error,
            title: title.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// State of the new-task dialog
#[derive(Clone, Debug, Default)]
pub struct NewTaskForm {
    open: bool,
    pub draft: TaskDraft,
}

impl NewTaskForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close the dialog and forget what was typed in
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
