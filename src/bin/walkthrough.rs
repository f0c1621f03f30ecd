//! Walks every dashboard surface against an in-memory store.
//! Run with `RUST_LOG=debug` for the full story.

use std::sync::Arc;

use chrono::{Duration, Local, Utc};
use uuid::Uuid;

use taskflow::memory::MemoryStore;
use taskflow::views::{ArchiveView, CalendarView, DashboardView, SettingsView, TaskListView};
use taskflow::{Priority, Profile, Session, SessionContext, TaskDraft};

#[tokio::main]
async fn main() {
    env_logger::init();

    let store = Arc::new(MemoryStore::new());
    let context = SessionContext::new();

    // Fabricate the identity the hosted service would have created at signup
    let user_id = Uuid::new_v4();
    store.add_profile(Profile::new(user_id, "Jane Doe", "jane@example.com"));
    context.set(Some(Session::new("local-demo-token", user_id, "jane@example.com", None)));

    let mut dashboard = DashboardView::new(store.clone(), context.clone());
    dashboard.form_mut().open();
    dashboard.form_mut().draft = TaskDraft {
        title: "Buy milk".to_string(),
        description: "Semi-skimmed".to_string(),
        priority: Priority::Low,
        due_date: Some(Utc::now() + Duration::days(1)),
        ..TaskDraft::default()
    };
    dashboard.create_task().await.unwrap();
    dashboard.form_mut().open();
    dashboard.form_mut().draft = TaskDraft {
        title: "Water the plants".to_string(),
        priority: Priority::High,
        ..TaskDraft::default()
    };
    dashboard.create_task().await.unwrap();

    let summary = dashboard.summary();
    println!("---- dashboard: {} task(s), {} pending, {} completed ----", summary.total, summary.pending, summary.completed);

    let mut list = TaskListView::new(store.clone(), context.clone());
    list.load().await.unwrap();
    let first = list.tasks()[0].id();
    list.complete_task(first).await.unwrap();
    list.archive_task(first).await.unwrap();
    println!("---- active tasks ----");
    taskflow::utils::print_task_list(list.tasks());

    let mut archive = ArchiveView::new(store.clone(), context.clone());
    archive.load().await.unwrap();
    println!("---- archived tasks ----");
    taskflow::utils::print_task_list(archive.tasks());

    let mut calendar = CalendarView::new(store.clone(), context.clone());
    calendar.load().await.unwrap();
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    calendar.select(tomorrow);
    println!("---- due on {} ----", tomorrow);
    for task in calendar.selected_tasks() {
        taskflow::utils::print_task(task);
    }

    let mut settings = SettingsView::new(store.clone(), context.clone());
    settings.load().await.unwrap();
    settings.set_full_name("Jane A. Doe");
    settings.update_profile().await.unwrap();
    println!("---- profile: {} <{}> ----", settings.full_name(), settings.email().unwrap_or("?"));
}
