//! Journal entry record.
//!
//! # Invariants
//! - `date` is the creation instant and never changes afterwards.

use crate::model::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a freshly created entry before the author renames it.
pub const DEFAULT_ENTRY_TITLE: &str = "New Entry";

/// Mood tag attached to an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    #[default]
    Neutral,
    Sad,
}

/// One entry in the journal collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntityId,
    /// Creation instant; immutable after creation.
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

impl JournalEntry {
    /// Creates a blank entry with default title and neutral mood.
    pub fn new(id: EntityId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: created_at,
            title: DEFAULT_ENTRY_TITLE.to_string(),
            content: String::new(),
            mood: Mood::default(),
        }
    }
}
