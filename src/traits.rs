use async_trait::async_trait;

use crate::error::Result;
use crate::profile::Profile;
use crate::session::Session;
use crate::task::{Task, TaskDraft, TaskFilter, TaskId, TaskPatch};

/// A source of task and profile rows, scoped to an authenticated identity.
///
/// The hosted service enforces row ownership server-side; the in-memory
/// [`MemoryStore`](crate::memory::MemoryStore) mirrors that scoping, so the two
/// sources are interchangeable behind this trait. Views only ever talk to a
/// `TaskStore`, never to a concrete source.
#[async_trait]
pub trait TaskStore {
    /// Fetch the task rows matching `filter`, in its requested order
    async fn list_tasks(&self, session: &Session, filter: TaskFilter) -> Result<Vec<Task>>;

    /// Insert a new row owned by the session identity.
    /// The store fills the lifecycle defaults (`pending`, not archived) and
    /// returns the stored row.
    async fn insert_task(&self, session: &Session, draft: TaskDraft) -> Result<Task>;

    /// Apply `patch` to the row with this id
    async fn update_task(&self, session: &Session, id: TaskId, patch: TaskPatch) -> Result<()>;

    /// Permanently remove the row with this id. There is no undo.
    async fn delete_task(&self, session: &Session, id: TaskId) -> Result<()>;

    /// The profile row whose identity matches the session
    async fn get_profile(&self, session: &Session) -> Result<Profile>;

    /// Update the single editable profile field
    async fn update_profile(&self, session: &Session, full_name: &str) -> Result<()>;
}
