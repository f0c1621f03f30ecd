mod scenarii;

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Utc};
use taskflow::views::CalendarView;
use taskflow::TaskStatus;

use scenarii::{seed_task, signed_in_bench, Bench};

/// A due date that falls on the given local calendar day
fn due_on(day: NaiveDate) -> chrono::DateTime<Utc> {
    Local
        .with_ymd_and_hms(day.year(), day.month(), day.day(), 10, 30, 0)
        .unwrap()
        .with_timezone(&Utc)
}

async fn loaded_calendar(bench: &Bench) -> CalendarView<taskflow::memory::MemoryStore> {
    let mut calendar = CalendarView::new(bench.store.clone(), bench.context.clone());
    calendar.load().await.unwrap();
    calendar
}

#[tokio::test]
async fn a_task_shows_on_its_due_day_and_not_the_next() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bench = signed_in_bench();
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    seed_task(&bench, "Dentist", TaskStatus::Pending, false, Some(due_on(day)), 0);

    let calendar = loaded_calendar(&bench).await;
    let titles: Vec<&str> = calendar.tasks_for_date(day).iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Dentist"]);
    assert!(calendar.tasks_for_date(day + Duration::days(1)).is_empty());
    assert!(calendar.tasks_for_date(day - Duration::days(1)).is_empty());
}

#[tokio::test]
async fn the_grid_marks_only_days_with_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bench = signed_in_bench();
    let busy = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let quiet = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
    seed_task(&bench, "One", TaskStatus::Pending, false, Some(due_on(busy)), 0);
    seed_task(&bench, "Two", TaskStatus::Completed, false, Some(due_on(busy)), 1);

    let calendar = loaded_calendar(&bench).await;
    assert!(calendar.day_has_tasks(busy));
    assert!(!calendar.day_has_tasks(quiet));
    assert_eq!(calendar.tasks_for_date(busy).len(), 2);
}

#[tokio::test]
async fn archived_and_completed_tasks_still_appear() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bench = signed_in_bench();
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    seed_task(&bench, "Archived one", TaskStatus::Pending, true, Some(due_on(day)), 0);
    seed_task(&bench, "Done one", TaskStatus::Completed, false, Some(due_on(day)), 1);

    let calendar = loaded_calendar(&bench).await;
    assert_eq!(calendar.tasks_for_date(day).len(), 2);
}

#[tokio::test]
async fn undated_tasks_never_appear_on_the_grid() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bench = signed_in_bench();
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    seed_task(&bench, "Someday", TaskStatus::Pending, false, None, 0);

    let calendar = loaded_calendar(&bench).await;
    assert!(calendar.tasks_for_date(day).is_empty());
    assert!(!calendar.day_has_tasks(day));
}

#[tokio::test]
async fn selecting_a_day_updates_the_side_list_only() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bench = signed_in_bench();
    let today = Local::now().date_naive();
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    seed_task(&bench, "Dentist", TaskStatus::Pending, false, Some(due_on(day)), 0);

    let mut calendar = loaded_calendar(&bench).await;
    // A fresh view starts on today's date
    assert_eq!(calendar.selected(), today);

    calendar.select(day);
    assert_eq!(calendar.selected(), day);
    let titles: Vec<&str> = calendar.selected_tasks().iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Dentist"]);
}
