//! Month grid computation for the calendar view.
//!
//! # Invariants
//! - The grid spans whole Sunday-start weeks, from the week containing the
//!   1st of the reference month through the week containing its last day:
//!   always 35 or 42 cells.

use crate::model::task::Task;
use chrono::{Datelike, Days, Months, NaiveDate};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridDay {
    pub date: NaiveDate,
    /// Whether the day belongs to the reference month (leading/trailing
    /// cells of the surrounding weeks do not).
    pub in_month: bool,
    /// Whether the day is the caller-supplied current day.
    pub is_today: bool,
    /// Tasks whose creation date falls on this day, in collection order.
    pub tasks: Vec<Task>,
}

/// Returns the tasks whose creation date falls on the given calendar day.
pub fn tasks_on_day(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.date.date_naive() == day)
        .cloned()
        .collect()
}

/// Builds the month grid for the month containing `reference`.
pub fn month_grid(tasks: &[Task], reference: NaiveDate, today: NaiveDate) -> Vec<MonthGridDay> {
    let first = reference - Days::new(u64::from(reference.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(first);

    let start = first
        .checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_sunday())))
        .unwrap_or(first);
    let end = last
        .checked_add_days(Days::new(u64::from(
            6 - last.weekday().num_days_from_sunday(),
        )))
        .unwrap_or(last);

    let mut grid = Vec::new();
    let mut day = start;
    while day <= end {
        grid.push(MonthGridDay {
            date: day,
            in_month: day.month() == first.month() && day.year() == first.year(),
            is_today: day == today,
            tasks: tasks_on_day(tasks, day),
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    grid
}
