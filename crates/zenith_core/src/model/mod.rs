//! Domain model for the five board collections.
//!
//! # Responsibility
//! - Define the plain records held in each named collection.
//! - Keep serialized field names and enum values stable across restarts.
//!
//! # Invariants
//! - Every entity carries an opaque unique id assigned at creation.
//! - Entities hold no behavior beyond construction defaults; all mutation
//!   goes through `ops` and all reading through `view`.

pub mod goal;
pub mod habit;
pub mod ids;
pub mod journal;
pub mod task;
pub mod vision;

/// Opaque unique identifier assigned at creation and never reused.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = String;
