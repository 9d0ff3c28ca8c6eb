//! Habit streak computation.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Counts consecutive completed days, walking backward from `today`.
///
/// The walk stops at the first missing day including `today` itself: a
/// habit completed every day through yesterday but not yet today has a
/// streak of 0.
pub fn streak_length(history: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    while history.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}
