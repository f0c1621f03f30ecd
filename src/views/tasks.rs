//! The active task list

use std::sync::Arc;

use crate::error::{AuthError, Error};
use crate::session::SessionContext;
use crate::task::{Task, TaskFilter, TaskId, TaskPatch};
use crate::traits::TaskStore;
use crate::views::{LoadState, NewTaskForm, Notice};

/// Non-archived tasks, newest first, with the complete/archive/create actions
pub struct TaskListView<S: TaskStore> {
    store: Arc<S>,
    session: SessionContext,
    state: LoadState,
    tasks: Vec<Task>,
    form: NewTaskForm,
    notice: Option<Notice>,
}

impl<S: TaskStore> TaskListView<S> {
    pub fn new(store: Arc<S>, session: SessionContext) -> Self {
        Self {
            store,
            session,
            state: LoadState::Loading,
            tasks: Vec::new(),
            form: NewTaskForm::default(),
            notice: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The displayed list
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether to render the explicit empty-state message instead of a list
    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Ready && self.tasks.is_empty()
    }

    pub fn form(&self) -> &NewTaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NewTaskForm {
        &mut self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch the non-archived rows, newest first
    pub async fn load(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;
        self.state = LoadState::Loading;

        match self.store.list_tasks(&session, TaskFilter::active()).await {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(Error::Auth(err)) => {
                self.state = LoadState::Ready;
                return Err(err);
            }
            Err(err) => {
                log::warn!("Could not fetch tasks: {}", err);
                self.notice = Some(Notice::error("Error fetching tasks", err));
            }
        }
        self.state = LoadState::Ready;
        Ok(())
    }

    /// Mark a task completed.
    ///
    /// The displayed entry is updated in place rather than re-fetched, so a
    /// false-positive success can drift from the server until the next load.
    /// Completing an already-completed task succeeds and changes nothing.
    pub async fn complete_task(&mut self, id: TaskId) -> Result<(), AuthError> {
        let session = self.session.require()?;

        match self.store.update_task(&session, id, TaskPatch::complete()).await {
            Ok(()) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) {
                    task.apply(&TaskPatch::complete());
                }
                self.notice = Some(Notice::info("Task completed", "Task has been marked as completed."));
            }
            Err(Error::Auth(err)) => return Err(err),
            Err(err) => {
                self.notice = Some(Notice::error("Error updating task", err));
            }
        }
        Ok(())
    }

    /// Move a task to the archive.
    ///
    /// On success the entry leaves the displayed list, matching the
    /// server-side `archived = false` filter of [`load`](Self::load).
    pub async fn archive_task(&mut self, id: TaskId) -> Result<(), AuthError> {
        let session = self.session.require()?;

        match self.store.update_task(&session, id, TaskPatch::archive()).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id() != id);
                self.notice = Some(Notice::info("Task archived", "Task has been moved to archive."));
            }
            Err(Error::Auth(err)) => return Err(err),
            Err(err) => {
                self.notice = Some(Notice::error("Error archiving task", err));
            }
        }
        Ok(())
    }

    /// Submit the new-task form.
    ///
    /// On success the dialog closes, the draft resets and the whole list is
    /// fetched again. On failure both stay exactly as the user entered them.
    pub async fn create_task(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;

        if let Err(err) = self.form.draft.validate() {
            self.notice = Some(Notice::error("Error creating task", err));
            return Ok(());
        }

        match self.store.insert_task(&session, self.form.draft.clone()).await {
            Ok(task) => {
                log::debug!("Created task {}", task.id());
                self.form.reset();
                self.notice = Some(Notice::info("Task created", "Your task has been created successfully."));
                self.load().await?;
            }
            Err(Error::Auth(err)) => return Err(err),
            Err(err) => {
                self.notice = Some(Notice::error("Error creating task", err));
            }
        }
        Ok(())
    }
}
