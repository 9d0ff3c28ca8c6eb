//! Generative-text boundary.
//!
//! # Responsibility
//! - Define the request/response contract the core consumes: one prompt
//!   kind plus optional short context in, opaque text out.
//! - Guarantee the boundary never fails upward: every error collapses to a
//!   prompt-kind-specific fallback string.
//!
//! # Invariants
//! - Responses are opaque text; the core performs no parsing of them.
//! - One request per control may be in flight at a time; late results from
//!   an abandoned context are discarded, not cancelled.

pub mod gate;
pub mod generator;
pub mod prompt;

pub use gate::{GenerationGate, GenerationTicket};
pub use generator::{generate_or_fallback, GeminiGenerator, GenError, TextGenerator};
pub use prompt::PromptKind;
