//! Injected id-generation capability.
//!
//! # Responsibility
//! - Decouple entity creation from the runtime UUID facility so tests can
//!   supply deterministic ids.
//!
//! # Invariants
//! - Generated ids are unique for the lifetime of the generator.

use crate::model::EntityId;
use std::cell::Cell;
use uuid::Uuid;

/// Source of fresh entity ids.
pub trait IdGenerator {
    /// Returns a new id, never previously returned by this generator.
    fn next_id(&self) -> EntityId;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> EntityId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based generator for tests and fixtures.
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: &'static str,
    next: Cell<u64>,
}

impl SequenceGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_id(&self) -> EntityId {
        let value = self.next.get();
        self.next.set(value + 1);
        format!("{}-{value:04}", self.prefix)
    }
}
