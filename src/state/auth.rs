//! Auth state for the current browser user plus the startup session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is the source of truth for "is someone signed in";
//! `AuthState` mirrors it into a signal so gates, the navbar, and pages
//! re-render when it changes. The session check runs once per app load,
//! before any gate decides.
//!
//! ERROR HANDLING
//! ==============
//! A failed check is not an error for the user: the session simply stays a
//! guest session. Failures are logged at debug level and swallowed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::session::SessionContext;

/// Reactive mirror of the session, provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Startup session check still outstanding; gates render a pending view.
    pub verifying: bool,
    pub authenticated: bool,
    pub user: Option<User>,
}

impl AuthState {
    /// Initial state before the startup check runs.
    pub fn pending(session: &SessionContext) -> Self {
        Self { verifying: true, authenticated: session.is_authenticated(), user: None }
    }

    /// Re-read the session after login, logout, or a failed request.
    pub fn sync(&mut self, session: &SessionContext) {
        self.authenticated = session.is_authenticated();
        if !self.authenticated {
            self.user = None;
        }
    }

    pub fn finish_verification(&mut self, session: &SessionContext) {
        self.verifying = false;
        self.sync(session);
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str()).filter(|n| !n.is_empty())
    }
}

/// Ask the backend whether the transport already carries a valid session.
///
/// `probe` is the authenticated current-user request. Success activates the
/// session; any failure leaves it untouched.
pub async fn verify_session<F, Fut, T>(session: &SessionContext, probe: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match probe().await {
        Ok(_) => {
            session.mark_active();
            log::debug!("session verified");
            true
        }
        Err(e) => {
            log::debug!("session check failed, continuing as guest: {e}");
            false
        }
    }
}

/// Startup check: a readable token short-circuits to authenticated,
/// otherwise the backend is asked via `verify_session`.
pub async fn restore_session<F, Fut, T>(session: &SessionContext, probe: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    if session.token().is_some() {
        return true;
    }
    verify_session(session, probe).await
}
