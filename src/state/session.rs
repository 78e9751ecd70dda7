//! Process-wide session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App`, provided through Leptos context, and consulted by
//! route gates, the navbar, and every outgoing API request. The in-memory
//! flag bridges the gap between a successful login and the moment the
//! backend's cookie becomes observable (or forever, for HTTP-only cookies).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::util::token_store::{MemoryTokenStore, TokenStore};

/// Session flag plus token store. Clones share the same state.
#[derive(Clone)]
pub struct SessionContext {
    active: Arc<AtomicBool>,
    tokens: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { active: Arc::new(AtomicBool::new(false)), tokens }
    }

    /// Session backed by an in-memory token slot.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// Record a successful login, signup, or verification.
    pub fn mark_active(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    /// Log out: drop the flag and the stored token.
    pub fn mark_inactive(&self) {
        self.active.store(false, Ordering::Relaxed);
        self.tokens.clear_token();
    }

    /// `flag || token present`. Side-effect free.
    pub fn is_authenticated(&self) -> bool {
        self.active.load(Ordering::Relaxed) || self.tokens.get_token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get_token()
    }

    /// Persist a backend-issued token and activate the session.
    pub fn store_token(&self, token: &str) {
        self.tokens.set_token(token);
        self.mark_active();
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("active", &self.active.load(Ordering::Relaxed))
            .field("has_token", &self.tokens.get_token().is_some())
            .finish()
    }
}
