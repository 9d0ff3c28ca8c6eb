//! Collection store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist each named collection as one JSON text body in the
//!   `collections` key-value table.
//!
//! # Invariants
//! - `load` treats an absent row or a malformed body as an empty sequence
//!   and logs the fallback; it never raises for corrupt data.
//! - `save` replaces the prior body atomically in one statement.

use crate::store::StoreResult;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Persisted key for the task collection.
pub const COLLECTION_TASKS: &str = "zenith_tasks";
/// Persisted key for the habit collection.
pub const COLLECTION_HABITS: &str = "zenith_habits";
/// Persisted key for the goal collection.
pub const COLLECTION_GOALS: &str = "zenith_goals";
/// Persisted key for the journal collection.
pub const COLLECTION_JOURNAL: &str = "zenith_journal";
/// Persisted key for the vision board collection.
pub const COLLECTION_VISION: &str = "zenith_vision";

/// Returns the five persisted collection keys.
pub fn collection_names() -> [&'static str; 5] {
    [
        COLLECTION_TASKS,
        COLLECTION_HABITS,
        COLLECTION_GOALS,
        COLLECTION_JOURNAL,
        COLLECTION_VISION,
    ]
}

/// Load/save contract for named collections.
pub trait CollectionStore {
    /// Returns the previously saved sequence for `name`.
    ///
    /// An absent key or an unreadable body yields an empty sequence; only
    /// medium transport failures return an error.
    fn load<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Vec<T>>;

    /// Serializes and persists the full sequence, replacing any prior value.
    fn save<T: Serialize>(&self, name: &str, items: &[T]) -> StoreResult<()>;
}

/// SQLite-backed collection store.
pub struct SqliteCollectionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CollectionStore for SqliteCollectionStore<'_> {
    fn load<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Vec<T>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM collections WHERE name = ?1;",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&body) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=fallback_empty name={name} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save<T: Serialize>(&self, name: &str, items: &[T]) -> StoreResult<()> {
        let body = serde_json::to_string(items).map_err(crate::store::StoreError::Serialize)?;

        self.conn.execute(
            "INSERT INTO collections (name, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![name, body],
        )?;

        info!(
            "event=collection_save module=store status=ok name={name} count={}",
            items.len()
        );
        Ok(())
    }
}
