//! Request generations for discarding stale async responses.
//!
//! Each request takes a ticket; a response is applied only while its ticket
//! is still the newest. `retire` (called from `on_cleanup`) invalidates every
//! ticket so late responses never write into an unmounted view.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
    retired: Arc<AtomicBool>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.retired.load(Ordering::Relaxed) && self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate all outstanding and future tickets.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::Relaxed);
    }
}
