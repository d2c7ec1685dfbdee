//! Monotonic sequencing for independent fetches.
//!
//! Responses from the network are not ordered: a slow early request can
//! resolve after a fast later one. Every fetch therefore takes a ticket,
//! and a response may only be applied while its ticket is still the latest
//! issued. Stale responses are discarded, never rendered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: AtomicU64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket is still the latest issued fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }
}
