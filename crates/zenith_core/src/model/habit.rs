//! Habit record with its per-day completion history.
//!
//! # Invariants
//! - `history` holds at most one marker per calendar day; membership means
//!   the habit was completed that day.
//! - `color` is a presentation tag assigned round-robin at creation and is
//!   otherwise opaque to the core.

use crate::model::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fixed palette cycled through as habits are created.
pub const HABIT_COLOR_PALETTE: [&str; 6] = [
    "bg-indigo-500",
    "bg-emerald-500",
    "bg-rose-500",
    "bg-amber-500",
    "bg-purple-500",
    "bg-cyan-500",
];

/// One tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    /// Calendar days on which the habit was completed.
    pub history: BTreeSet<NaiveDate>,
    pub color: String,
}

impl Habit {
    /// Creates a habit with an empty history.
    pub fn new(id: EntityId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            history: BTreeSet::new(),
            color: color.into(),
        }
    }

    /// Returns whether the habit was completed on the given day.
    pub fn completed_on(&self, day: NaiveDate) -> bool {
        self.history.contains(&day)
    }
}
