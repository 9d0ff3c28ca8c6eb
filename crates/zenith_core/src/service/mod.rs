//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure operations and the collection store into use-case
//!   level APIs for the presentation layer.
//! - Keep presentation code decoupled from storage details.

pub mod board_service;
