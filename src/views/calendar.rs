//! The calendar surface: a day grid beside the tasks due on the selected day

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::{AuthError, Error};
use crate::session::SessionContext;
use crate::task::{Task, TaskFilter};
use crate::traits::TaskStore;
use crate::views::{LoadState, Notice};

/// Every task (archived or not, completed or not) grouped by due day.
/// Read-only: no mutation is exposed from this surface.
pub struct CalendarView<S: TaskStore> {
    store: Arc<S>,
    session: SessionContext,
    state: LoadState,
    tasks: Vec<Task>,
    selected: NaiveDate,
    notice: Option<Notice>,
}

impl<S: TaskStore> CalendarView<S> {
    /// A fresh view with today (local time) selected
    pub fn new(store: Arc<S>, session: SessionContext) -> Self {
        Self {
            store,
            session,
            state: LoadState::Loading,
            tasks: Vec::new(),
            selected: Local::now().date_naive(),
            notice: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Change the selected day; only the side list follows, nothing is fetched
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch every row, ordered by due date
    pub async fn load(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;
        self.state = LoadState::Loading;

        match self.store.list_tasks(&session, TaskFilter::all_by_due_date()).await {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(Error::Auth(err)) => {
                self.state = LoadState::Ready;
                return Err(err);
            }
            Err(err) => {
                log::warn!("Could not fetch tasks for the calendar: {}", err);
                self.notice = Some(Notice::error("Error fetching tasks", err));
            }
        }
        self.state = LoadState::Ready;
        Ok(())
    }

    /// The tasks whose due date falls on this calendar day, in local time.
    /// Tasks without a due date never appear on the grid.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| {
                task.due_date()
                    .map(|due| due.with_timezone(&Local).date_naive() == date)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Whether the day grid should mark this day
    pub fn day_has_tasks(&self, date: NaiveDate) -> bool {
        !self.tasks_for_date(date).is_empty()
    }

    /// The side list: tasks for the selected day
    pub fn selected_tasks(&self) -> Vec<&Task> {
        self.tasks_for_date(self.selected)
    }
}
