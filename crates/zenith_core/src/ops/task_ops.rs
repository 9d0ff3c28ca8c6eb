//! Task collection operations.

use crate::model::ids::IdGenerator;
use crate::model::task::{Task, TaskKind};
use chrono::{DateTime, Utc};

/// Appends a new open task.
///
/// Blank text (after trimming) is rejected and the collection is returned
/// unchanged.
pub fn add_task(
    tasks: &[Task],
    ids: &dyn IdGenerator,
    text: &str,
    kind: TaskKind,
    created_at: DateTime<Utc>,
) -> Vec<Task> {
    if text.trim().is_empty() {
        return tasks.to_vec();
    }

    let mut next = tasks.to_vec();
    next.push(Task::new(ids.next_id(), text, kind, created_at));
    next
}

/// Flips the completion flag of the task with the given id.
pub fn toggle_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                let mut toggled = task.clone();
                toggled.completed = !task.completed;
                toggled
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Removes the task with the given id, if present.
pub fn remove_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Removes every completed task of the given kind.
pub fn clear_completed(tasks: &[Task], kind: TaskKind) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !(task.kind == kind && task.completed))
        .cloned()
        .collect()
}
