//! Case-insensitive substring search over collection entities.

use crate::model::goal::Goal;
use crate::model::journal::JournalEntry;
use crate::model::task::Task;
use crate::model::vision::VisionItem;

/// Text haystacks an entity exposes to the search filter.
pub trait SearchText {
    /// Title-like field.
    fn title_text(&self) -> &str;
    /// Body-like field; empty when the entity has none.
    fn body_text(&self) -> &str {
        ""
    }
}

impl SearchText for JournalEntry {
    fn title_text(&self) -> &str {
        &self.title
    }

    fn body_text(&self) -> &str {
        &self.content
    }
}

impl SearchText for Task {
    fn title_text(&self) -> &str {
        &self.text
    }
}

impl SearchText for Goal {
    fn title_text(&self) -> &str {
        &self.title
    }

    fn body_text(&self) -> &str {
        &self.description
    }
}

impl SearchText for VisionItem {
    fn title_text(&self) -> &str {
        &self.caption
    }
}

/// Returns the entities matching `query`, preserving collection order.
///
/// Matching is a case-insensitive substring test against title and body;
/// an empty query matches everything.
pub fn filter_matching<T: SearchText + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title_text().to_lowercase().contains(&needle)
                || item.body_text().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_matching;
    use crate::model::journal::{JournalEntry, Mood};
    use chrono::Utc;

    fn entry(id: &str, title: &str, content: &str) -> JournalEntry {
        let mut entry = JournalEntry::new(id.to_string(), Utc::now());
        entry.title = title.to_string();
        entry.content = content.to_string();
        entry.mood = Mood::Neutral;
        entry
    }

    #[test]
    fn match_is_case_insensitive_over_title_and_body() {
        let entries = vec![
            entry("a", "Morning pages", ""),
            entry("b", "Untitled", "walked along the RIVER"),
            entry("c", "Groceries", "milk and eggs"),
        ];

        let hits = filter_matching(&entries, "river");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn empty_query_matches_all_in_order() {
        let entries = vec![entry("a", "first", ""), entry("b", "second", "")];
        let hits = filter_matching(&entries, "");
        assert_eq!(
            hits.iter().map(|entry| entry.id.as_str()).collect::<Vec<_>>(),
            ["a", "b"]
        );
    }
}
