//! Task subset and completion computations.

use crate::model::task::{Task, TaskKind};
use chrono::NaiveDate;

/// Returns the tasks of one planning horizon, preserving collection order.
pub fn tasks_of_kind(tasks: &[Task], kind: TaskKind) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.kind == kind)
        .cloned()
        .collect()
}

/// Returns the daily tasks created on the given calendar day.
///
/// Comparison is by calendar day, not timestamp.
pub fn daily_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.kind == TaskKind::Daily && task.date.date_naive() == today)
        .cloned()
        .collect()
}

/// Returns the rounded completion percentage of a task subset.
///
/// An empty subset is 0, not a division error.
pub fn completion_percent(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }

    let completed = tasks.iter().filter(|task| task.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::completion_percent;
    use crate::model::task::{Task, TaskKind};
    use chrono::Utc;

    fn task(id: &str, completed: bool) -> Task {
        let mut task = Task::new(id.to_string(), "t", TaskKind::Daily, Utc::now());
        task.completed = completed;
        task
    }

    #[test]
    fn empty_subset_is_zero_percent() {
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn all_complete_is_always_one_hundred() {
        let tasks = vec![task("a", true), task("b", true), task("c", true)];
        assert_eq!(completion_percent(&tasks), 100);
    }

    #[test]
    fn one_of_three_rounds_down_to_thirty_three() {
        let tasks = vec![task("a", true), task("b", false), task("c", false)];
        assert_eq!(completion_percent(&tasks), 33);
    }
}
