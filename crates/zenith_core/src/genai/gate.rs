//! In-flight request gating for a single issuing control.
//!
//! # Invariants
//! - At most one request per gate is pending at a time.
//! - A result is applied only when its initiating context is still
//!   current; the underlying call is never cancelled.

use std::cell::Cell;

/// Proof that a request was started under a particular gate context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

/// Single-threaded pending flag plus context epoch for one control.
///
/// The issuing view calls [`GenerationGate::try_begin`] before firing a
/// request and [`GenerationGate::accept`] when the result arrives. When the
/// user navigates away the view calls [`GenerationGate::reset`], after
/// which any in-flight result is rejected on arrival.
#[derive(Debug, Default)]
pub struct GenerationGate {
    pending: Cell<bool>,
    epoch: Cell<u64>,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a request is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Starts a request, or refuses while another one is pending.
    pub fn try_begin(&self) -> Option<GenerationTicket> {
        if self.pending.get() {
            return None;
        }

        self.pending.set(true);
        Some(GenerationTicket {
            epoch: self.epoch.get(),
        })
    }

    /// Finishes a request; returns whether its result should be applied.
    ///
    /// A ticket from a superseded context reports `false` and the caller
    /// discards the result.
    pub fn accept(&self, ticket: GenerationTicket) -> bool {
        if ticket.epoch != self.epoch.get() {
            return false;
        }

        self.pending.set(false);
        true
    }

    /// Invalidates the current context, e.g. when the user navigates away.
    pub fn reset(&self) {
        self.pending.set(false);
        self.epoch.set(self.epoch.get() + 1);
    }
}
