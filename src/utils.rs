//! Some utility functions

use chrono::Local;

use crate::task::Task;

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let archived = if task.archived() { "(archived) " } else { "" };
    let due = match task.due_date() {
        Some(due) => format!("due {}", due.with_timezone(&Local).date_naive()),
        None => String::new(),
    };
    println!(
        "    {} [{}] {}{}\t{}",
        completion,
        task.priority(),
        archived,
        task.title(),
        due
    );
}
