//! Debouncing for free-text filter input.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time;

/// Identifies one keystroke within a [`Debouncer`]'s generation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Generation-counted debouncer.
///
/// Every keystroke trips a new generation; a ticket settles only if no newer
/// keystroke arrived while its delay elapsed. Five keystrokes inside the
/// window therefore produce exactly one recompute, firing one delay after
/// the last of them.
///
/// Cloning is cheap and shares the generation counter, so the caller can
/// settle a ticket on a spawned task while the view stays borrowable.
#[derive(Debug, Clone)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl Debouncer {
    /// Delay used for free-text search input.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    pub fn new(delay: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Registers a keystroke, superseding every earlier ticket.
    pub fn trip(&self) -> DebounceTicket {
        DebounceTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket is still the newest keystroke.
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Waits out the delay; returns whether the ticket survived unsuperseded.
    pub async fn settle(&self, ticket: DebounceTicket) -> bool {
        time::sleep(self.delay).await;
        self.is_current(ticket)
    }
}
