//! Archived tasks, and the only place a task can be permanently deleted

use std::sync::Arc;

use crate::error::{AuthError, Error};
use crate::session::SessionContext;
use crate::task::{Task, TaskFilter, TaskId};
use crate::traits::TaskStore;
use crate::views::{LoadState, Notice};

/// Tasks flagged `archived`, newest first. There is no un-archive action.
pub struct ArchiveView<S: TaskStore> {
    store: Arc<S>,
    session: SessionContext,
    state: LoadState,
    tasks: Vec<Task>,
    notice: Option<Notice>,
}

impl<S: TaskStore> ArchiveView<S> {
    pub fn new(store: Arc<S>, session: SessionContext) -> Self {
        Self {
            store,
            session,
            state: LoadState::Loading,
            tasks: Vec::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Ready && self.tasks.is_empty()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch the archived rows, newest first
    pub async fn load(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;
        self.state = LoadState::Loading;

        match self.store.list_tasks(&session, TaskFilter::archived_only()).await {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(Error::Auth(err)) => {
                self.state = LoadState::Ready;
                return Err(err);
            }
            Err(err) => {
                log::warn!("Could not fetch archived tasks: {}", err);
                self.notice = Some(Notice::error("Error fetching archived tasks", err));
            }
        }
        self.state = LoadState::Ready;
        Ok(())
    }

    /// Permanently delete a task. Irreversible.
    ///
    /// The entry leaves the displayed list only once the remove succeeded; a
    /// failed delete keeps it visible.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<(), AuthError> {
        let session = self.session.require()?;

        match self.store.delete_task(&session, id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id() != id);
                self.notice = Some(Notice::info(
                    "Task deleted permanently",
                    "Task has been permanently deleted.",
                ));
            }
            Err(Error::Auth(err)) => return Err(err),
            Err(err) => {
                self.notice = Some(Notice::error("Error deleting task", err));
            }
        }
        Ok(())
    }
}
