//! Trailing-edge debounce for text input.
//!
//! DESIGN
//! ======
//! The browser timer is only a wake-up call: each `schedule` hands out a
//! ticket, and `fire` commits the pending value only for the newest ticket.
//! A superseded timer that still fires is therefore harmless, and the
//! "exactly one commit per burst" rule is testable without real time.
//! `SearchDebounce` pairs this with a single `gloo-timers` handle that each
//! keystroke replaces (dropping a `Timeout` cancels it).

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one `schedule` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
struct Slot<T> {
    latest: u64,
    pending: Option<T>,
}

/// Pending value plus generation counter. Clones share state.
#[derive(Debug)]
pub struct Debouncer<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { slot: Rc::new(RefCell::new(Slot { latest: 0, pending: None })) }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value and invalidate every earlier ticket.
    pub fn schedule(&self, value: T) -> DebounceTicket {
        let mut slot = self.slot.borrow_mut();
        slot.latest += 1;
        slot.pending = Some(value);
        DebounceTicket(slot.latest)
    }

    /// Take the pending value if `ticket` is still the newest one.
    pub fn fire(&self, ticket: DebounceTicket) -> Option<T> {
        let mut slot = self.slot.borrow_mut();
        if slot.latest != ticket.0 {
            return None;
        }
        slot.pending.take()
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.latest += 1;
        slot.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().pending.is_some()
    }
}

/// Debounced commit of search text: one live browser timer at a time.
pub struct SearchDebounce {
    delay_ms: u32,
    debouncer: Debouncer<String>,
    #[cfg(feature = "csr")]
    timer: Rc<RefCell<Option<gloo_timers::callback::Timeout>>>,
}

impl Clone for SearchDebounce {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            debouncer: self.debouncer.clone(),
            #[cfg(feature = "csr")]
            timer: Rc::clone(&self.timer),
        }
    }
}

impl SearchDebounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            debouncer: Debouncer::new(),
            #[cfg(feature = "csr")]
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Record a keystroke and (re)start the timer; `commit` runs once the
    /// input has been idle for the delay.
    pub fn input<F>(&self, value: String, commit: F)
    where
        F: FnOnce(String) + 'static,
    {
        let ticket = self.debouncer.schedule(value);
        #[cfg(feature = "csr")]
        {
            let debouncer = self.debouncer.clone();
            let timeout = gloo_timers::callback::Timeout::new(self.delay_ms, move || {
                if let Some(value) = debouncer.fire(ticket) {
                    commit(value);
                }
            });
            // Replacing the handle drops, and so cancels, the previous timer.
            *self.timer.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ticket, commit);
        }
    }

    /// A keystroke is waiting to be committed.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Forget any pending value, e.g. when filters are cleared.
    pub fn cancel(&self) {
        self.debouncer.cancel();
        #[cfg(feature = "csr")]
        {
            self.timer.borrow_mut().take();
        }
    }
}
