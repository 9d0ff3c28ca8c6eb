//! Goal record with clamped progress.
//!
//! # Invariants
//! - `progress` is always inside `0..=100`; every mutation path clamps
//!   before storing.

use crate::model::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed category set for goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalCategory {
    #[default]
    Personal,
    Career,
    Health,
    Wealth,
    Social,
}

/// One entry in the goal collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    /// Percent complete, clamped into `0..=100`.
    pub progress: u8,
    pub category: GoalCategory,
}

impl Goal {
    /// Creates a goal at zero progress.
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: Option<NaiveDate>,
        category: GoalCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            deadline,
            progress: 0,
            category,
        }
    }
}

/// Clamps an arbitrary progress input into the stored `0..=100` range.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
