//! Habit collection operations.

use crate::model::habit::{Habit, HABIT_COLOR_PALETTE};
use crate::model::ids::IdGenerator;
use chrono::NaiveDate;

/// Appends a new habit with an empty history.
///
/// The color tag is assigned round-robin from the fixed palette based on
/// the current collection length. Blank names are rejected.
pub fn add_habit(habits: &[Habit], ids: &dyn IdGenerator, name: &str) -> Vec<Habit> {
    if name.trim().is_empty() {
        return habits.to_vec();
    }

    let color = HABIT_COLOR_PALETTE[habits.len() % HABIT_COLOR_PALETTE.len()];
    let mut next = habits.to_vec();
    next.push(Habit::new(ids.next_id(), name, color));
    next
}

/// Toggles the completion marker for one calendar day of one habit.
///
/// A marked day is unmarked and vice versa; set membership guarantees no
/// duplicate markers can result.
pub fn toggle_habit_day(habits: &[Habit], id: &str, day: NaiveDate) -> Vec<Habit> {
    habits
        .iter()
        .map(|habit| {
            if habit.id == id {
                let mut toggled = habit.clone();
                if !toggled.history.remove(&day) {
                    toggled.history.insert(day);
                }
                toggled
            } else {
                habit.clone()
            }
        })
        .collect()
}

/// Removes the habit with the given id, if present.
pub fn remove_habit(habits: &[Habit], id: &str) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| habit.id != id)
        .cloned()
        .collect()
}
