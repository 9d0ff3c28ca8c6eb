//! Pure mutation operations over the five collections.
//!
//! # Responsibility
//! - Produce a new collection value from an old one plus an input; nothing
//!   here touches persistence or the wall clock.
//!
//! # Invariants
//! - Invalid input (blank required field) returns the collection unchanged.
//! - Mutating or deleting an id that is no longer present is a no-op, not
//!   an error.
//! - Creation appends to the end; insertion order is display order.

pub mod goal_ops;
pub mod habit_ops;
pub mod journal_ops;
pub mod task_ops;
pub mod vision_ops;
