//! Shared scenarios for the view lifecycle tests
//!
//! Every test starts from a [`Bench`]: an in-memory store standing in for the
//! hosted service, a signed-in session context, and the profile row the
//! service would have created at signup.

// Each test target only uses a subset of these helpers
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use taskflow::memory::MemoryStore;
use taskflow::mock_behaviour::MockBehaviour;
use taskflow::{Priority, Profile, Session, SessionContext, Task, TaskDraft, TaskId, TaskStatus};

pub struct Bench {
    pub store: Arc<MemoryStore>,
    pub context: SessionContext,
    pub user_id: Uuid,
}

/// A store with a signed-in identity and its profile row
pub fn signed_in_bench() -> Bench {
    bench_with_store(MemoryStore::new())
}

/// Same, but the store misbehaves according to `mock_behaviour`.
/// The returned handle can be used to re-arm or suspend the faults mid-test.
pub fn failing_bench(mock_behaviour: MockBehaviour) -> (Bench, Arc<Mutex<MockBehaviour>>) {
    let mock = Arc::new(Mutex::new(mock_behaviour));
    let bench = bench_with_store(MemoryStore::new_with_mock_behaviour(mock.clone()));
    (bench, mock)
}

fn bench_with_store(store: MemoryStore) -> Bench {
    let user_id = Uuid::new_v4();
    store.add_profile(Profile::new(user_id, "Jane Doe", "jane@example.com"));

    let context = SessionContext::new();
    context.set(Some(Session::new("test-token", user_id, "jane@example.com", None)));

    Bench {
        store: Arc::new(store),
        context,
        user_id,
    }
}

/// A context nobody has signed in to
pub fn signed_out_context() -> SessionContext {
    SessionContext::new()
}

pub fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..TaskDraft::default()
    }
}

/// Seed a task row directly, the way the service would hold it
pub fn seed_task(
    bench: &Bench,
    title: &str,
    status: TaskStatus,
    archived: bool,
    due_date: Option<DateTime<Utc>>,
    created_minute: u32,
) -> TaskId {
    let task = Task::new_with_parameters(
        Uuid::new_v4(),
        bench.user_id,
        title.to_string(),
        String::new(),
        Priority::default(),
        status,
        due_date,
        None,
        archived,
        None,
        Utc.with_ymd_and_hms(2024, 3, 1, 9, created_minute, 0).unwrap(),
    );
    let id = task.id();
    bench.store.add_task(task);
    id
}
