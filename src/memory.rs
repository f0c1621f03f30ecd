//! An in-process task source
//!
//! Useful on its own for demos, and as a stand-in for the remote service in
//! integration tests, where a [`MockBehaviour`] can make any operation fail on
//! purpose.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::mock_behaviour::MockBehaviour;
use crate::profile::Profile;
use crate::session::Session;
use crate::task::{Task, TaskDraft, TaskFilter, TaskId, TaskPatch};
use crate::traits::TaskStore;

/// A [`TaskStore`] holding its rows in memory.
///
/// Ownership scoping mirrors the hosted service: a session only ever sees and
/// touches its own rows, so tests exercise the same visibility rules the
/// server-side policy enforces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

#[derive(Debug, Default)]
struct StoreData {
    tasks: HashMap<TaskId, Task>,
    profiles: HashMap<Uuid, Profile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that misbehaves according to `mock_behaviour`
    pub fn new_with_mock_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            data: Mutex::new(StoreData::default()),
            mock_behaviour: Some(mock_behaviour),
        }
    }

    /// Create the profile row the hosted service would create at signup
    pub fn add_profile(&self, profile: Profile) {
        let mut data = self.data.lock().unwrap();
        data.profiles.insert(profile.id(), profile);
    }

    /// Seed a task row directly, bypassing the insert defaults
    pub fn add_task(&self, task: Task) {
        let mut data = self.data.lock().unwrap();
        data.tasks.insert(task.id(), task);
    }

    /// The stored row, mostly useful to assert on in tests
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.data.lock().unwrap().tasks.get(&id).cloned()
    }

    fn check<F>(&self, can_run: F) -> Result<()>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<()>,
    {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(mock) => can_run(&mut mock.lock().unwrap()),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self, session: &Session, filter: TaskFilter) -> Result<Vec<Task>> {
        self.check(|m| m.can_list_tasks())?;

        let mut tasks: Vec<Task> = {
            let data = self.data.lock().unwrap();
            data.tasks
                .values()
                .filter(|task| task.user_id() == session.user_id())
                .filter(|task| filter.matches(task))
                .cloned()
                .collect()
        };
        filter.order.sort(&mut tasks);
        Ok(tasks)
    }

    async fn insert_task(&self, session: &Session, draft: TaskDraft) -> Result<Task> {
        self.check(|m| m.can_insert_task())?;
        draft.validate()?;

        let task = Task::from_draft(draft, session.user_id());
        let mut data = self.data.lock().unwrap();
        data.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update_task(&self, session: &Session, id: TaskId, patch: TaskPatch) -> Result<()> {
        self.check(|m| m.can_update_task())?;

        let mut data = self.data.lock().unwrap();
        match data.tasks.get_mut(&id) {
            Some(task) if task.user_id() == session.user_id() => {
                task.apply(&patch);
                Ok(())
            }
            _ => Err(Error::Request("no task row with this id".to_string())),
        }
    }

    async fn delete_task(&self, session: &Session, id: TaskId) -> Result<()> {
        self.check(|m| m.can_delete_task())?;

        let mut data = self.data.lock().unwrap();
        let owned = data
            .tasks
            .get(&id)
            .map(|task| task.user_id() == session.user_id())
            .unwrap_or(false);
        if !owned {
            return Err(Error::Request("no task row with this id".to_string()));
        }
        data.tasks.remove(&id);
        Ok(())
    }

    async fn get_profile(&self, session: &Session) -> Result<Profile> {
        self.check(|m| m.can_get_profile())?;

        let data = self.data.lock().unwrap();
        data.profiles
            .get(&session.user_id())
            .cloned()
            .ok_or_else(|| Error::Request("no profile row for this identity".to_string()))
    }

    async fn update_profile(&self, session: &Session, full_name: &str) -> Result<()> {
        self.check(|m| m.can_update_profile())?;

        let mut data = self.data.lock().unwrap();
        match data.profiles.get_mut(&session.user_id()) {
            Some(profile) => {
                profile.set_full_name(full_name);
                Ok(())
            }
            None => Err(Error::Request("no profile row for this identity".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_for(user_id: Uuid) -> Session {
        Session::new("token", user_id, "someone@example.com", None)
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        }
    }

    #[tokio::test]
    async fn a_session_only_sees_its_own_rows() {
        let store = MemoryStore::new();
        let alice = session_for(Uuid::new_v4());
        let bob = session_for(Uuid::new_v4());

        store.insert_task(&alice, draft("Alice's task")).await.unwrap();
        let bobs_task = store.insert_task(&bob, draft("Bob's task")).await.unwrap();

        let seen = store.list_tasks(&alice, TaskFilter::all_recent_first()).await.unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title(), "Alice's task");

        // Alice cannot touch Bob's row either
        let update = store
            .update_task(&alice, bobs_task.id(), TaskPatch::complete())
            .await;
        assert!(update.is_err());
        let delete = store.delete_task(&alice, bobs_task.id()).await;
        assert!(delete.is_err());
        assert!(store.task(bobs_task.id()).is_some());
    }

    #[tokio::test]
    async fn inserted_rows_get_the_lifecycle_defaults() {
        let store = MemoryStore::new();
        let session = session_for(Uuid::new_v4());

        let task = store.insert_task(&session, draft("Buy milk")).await.unwrap();
        assert!(!task.completed());
        assert!(!task.archived());
        assert_eq!(task.user_id(), session.user_id());
    }

    #[tokio::test]
    async fn profiles_are_scoped_by_identity() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        store.add_profile(Profile::new(user_id, "Jane Doe", "jane@example.com"));

        let session = session_for(user_id);
        store.update_profile(&session, "Jane A. Doe").await.unwrap();
        let profile = store.get_profile(&session).await.unwrap();
        assert_eq!(profile.full_name(), "Jane A. Doe");
        assert_eq!(profile.email(), "jane@example.com");

        let stranger = session_for(Uuid::new_v4());
        assert!(store.get_profile(&stranger).await.is_err());
    }
}
