//! Task record and its planning-horizon kind.
//!
//! # Invariants
//! - `kind` is immutable after creation; `completed` toggles freely.
//! - `date` is the creation instant and identifies the calendar day the
//!   task belongs to in day-bucketed views.

use crate::model::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Planning horizon of a task list entry.
///
/// Serialized in uppercase to match the persisted collection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskKind {
    Daily,
    Weekly,
    Monthly,
}

/// One entry in the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub text: String,
    pub completed: bool,
    /// Serialized as `type` to match the persisted collection format.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Creation instant; never reassigned.
    pub date: DateTime<Utc>,
}

impl Task {
    /// Creates an open task with the given id and creation instant.
    pub fn new(
        id: EntityId,
        text: impl Into<String>,
        kind: TaskKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            kind,
            date: created_at,
        }
    }
}
