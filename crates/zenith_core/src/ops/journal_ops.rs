//! Journal collection operations.

use crate::model::ids::IdGenerator;
use crate::model::journal::{JournalEntry, Mood};
use chrono::{DateTime, Utc};

/// Appends a blank entry with default title and neutral mood.
pub fn add_entry(
    entries: &[JournalEntry],
    ids: &dyn IdGenerator,
    created_at: DateTime<Utc>,
) -> Vec<JournalEntry> {
    let mut next = entries.to_vec();
    next.push(JournalEntry::new(ids.next_id(), created_at));
    next
}

/// Replaces title, content and mood of one entry.
///
/// The creation date is immutable and left untouched.
pub fn update_entry(
    entries: &[JournalEntry],
    id: &str,
    title: &str,
    content: &str,
    mood: Mood,
) -> Vec<JournalEntry> {
    entries
        .iter()
        .map(|entry| {
            if entry.id == id {
                let mut updated = entry.clone();
                updated.title = title.to_string();
                updated.content = content.to_string();
                updated.mood = mood;
                updated
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Removes the entry with the given id, if present.
pub fn remove_entry(entries: &[JournalEntry], id: &str) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|entry| entry.id != id)
        .cloned()
        .collect()
}
