//! Persistence layer for the five named collections.
//!
//! # Responsibility
//! - Define the collection load/save contract consumed by the service layer.
//! - Isolate SQLite and serialization details from business orchestration.
//!
//! # Invariants
//! - A missing or unreadable collection body loads as an empty sequence,
//!   never as an error; only medium transport failures surface.
//! - Saves overwrite the whole collection; there are no partial writes.

pub mod collection_store;

pub use collection_store::{
    collection_names, CollectionStore, SqliteCollectionStore, COLLECTION_GOALS,
    COLLECTION_HABITS, COLLECTION_JOURNAL, COLLECTION_TASKS, COLLECTION_VISION,
};

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for collection load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
