//! Derived-view computations over the raw collections.
//!
//! # Responsibility
//! - Compute the values views display: day-bucketed task subsets,
//!   completion percentages, habit streaks, the month grid and search
//!   filtering.
//!
//! # Invariants
//! - Everything here is pure: inputs are borrowed, outputs are freshly
//!   derived, nothing is cached between calls.
//! - The current reference day is always an explicit parameter; nothing
//!   reads the wall clock.

pub mod calendar;
pub mod search;
pub mod streak;
pub mod tasks;
