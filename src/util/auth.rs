//! Route gate decisions shared by every guarded page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `RouteGate` is a predicate over the session plus a redirect target. The
//! app instantiates it twice: authenticated-only pages bounce guests to the
//! login route (remembering where they were headed), guest-only pages bounce
//! signed-in users home, or back to the remembered location when the login
//! URL carries one. That second rule is what completes a login: the login
//! page only updates the session and the guest gate does the navigation.
//! Decisions are recomputed on every navigation and session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::state::session::SessionContext;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
/// Login-route query key carrying the location a guest tried to open.
pub const FROM_PARAM: &str = "from";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Admit,
    Redirect(String),
}

/// What a redirect does with the location being left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Always go to the fixed target.
    Ignore,
    /// Append the current location as `from` to the target.
    Remember,
    /// Go to the current location's `from` value if it is local, else the target.
    Follow,
}

#[derive(Clone, Copy)]
pub struct RouteGate {
    admits: fn(&SessionContext) -> bool,
    redirect_to: &'static str,
    origin: OriginPolicy,
}

impl RouteGate {
    pub fn new(admits: fn(&SessionContext) -> bool, redirect_to: &'static str, origin: OriginPolicy) -> Self {
        Self { admits, redirect_to, origin }
    }

    /// Admits only authenticated sessions; others go to the login route.
    pub fn authenticated() -> Self {
        Self::new(SessionContext::is_authenticated, LOGIN_ROUTE, OriginPolicy::Remember)
    }

    /// Admits only guests; signed-in users go home or to `from`.
    pub fn guest() -> Self {
        Self::new(is_guest, HOME_ROUTE, OriginPolicy::Follow)
    }

    /// Decide for `location` (path plus optional `?query`).
    pub fn evaluate(&self, session: &SessionContext, location: &str) -> GateDecision {
        if (self.admits)(session) {
            return GateDecision::Admit;
        }
        let target = match self.origin {
            OriginPolicy::Ignore => self.redirect_to.to_owned(),
            OriginPolicy::Remember => redirect_with_origin(self.redirect_to, location),
            OriginPolicy::Follow => query_value(location, FROM_PARAM)
                .filter(|path| is_local_path(path))
                .unwrap_or_else(|| self.redirect_to.to_owned()),
        };
        GateDecision::Redirect(target)
    }
}

impl fmt::Debug for RouteGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGate")
            .field("redirect_to", &self.redirect_to)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

fn is_guest(session: &SessionContext) -> bool {
    !session.is_authenticated()
}

/// Join router path and search into one location string.
pub fn current_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

fn redirect_with_origin(target: &str, origin: &str) -> String {
    if origin.is_empty() || origin == HOME_ROUTE || !is_local_path(origin) {
        return target.to_owned();
    }
    format!("{target}?{FROM_PARAM}={}", urlencoding::encode(origin))
}

/// Decoded value of `key` in the query part of `location`.
fn query_value(location: &str, key: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| urlencoding::decode(&v.replace('+', " ")).ok().map(|v| v.into_owned()))
}

/// Only same-origin absolute paths are accepted as return targets.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
