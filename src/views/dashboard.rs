//! The dashboard landing surface: totals, recent tasks and the new-task dialog

use std::sync::Arc;

use crate::error::{AuthError, Error};
use crate::session::SessionContext;
use crate::task::{Task, TaskFilter, TaskStatus};
use crate::traits::TaskStore;
use crate::views::{LoadState, NewTaskForm, Notice};

/// Aggregate counts over every task the identity owns, archived included
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// The dashboard index: a summary, the most recent tasks, and task creation
pub struct DashboardView<S: TaskStore> {
    store: Arc<S>,
    session: SessionContext,
    state: LoadState,
    tasks: Vec<Task>,
    form: NewTaskForm,
    notice: Option<Notice>,
}

impl<S: TaskStore> DashboardView<S> {
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

    /// Fetch every row, newest first
    pub async fn load(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;
        self.state = LoadState::Loading;

        match self.store.list_tasks(&session, TaskFilter::all_recent_first()).await {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(Error::Auth(err)) => {
                self.state = LoadState::Ready;
                return Err(err);
            }
            Err(err) => {
                log::warn!("Could not fetch tasks for the dashboard: {}", err);
                self.notice = Some(Notice::error("Error fetching tasks", err));
            }
        }
        self.state = LoadState::Ready;
        Ok(())
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            total: self.tasks.len(),
            pending: self.tasks.iter().filter(|t| t.status() == TaskStatus::Pending).count(),
            completed: self.tasks.iter().filter(|t| t.status() == TaskStatus::Completed).count(),
        }
    }

    /// The `n` most recently created tasks
    pub fn recent(&self, n: usize) -> &[Task] {
        &self.tasks[..n.min(self.tasks.len())]
    }

    /// Submit the new-task dialog. Same contract as the task list: close and
    /// re-fetch on success, keep the entered values on failure.
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
