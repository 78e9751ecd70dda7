//! Auth token persistence across page reloads.
//!
//! DESIGN
//! ======
//! One `TokenStore` trait with a backend per auth transport: browser cookies
//! (read-only in practice when the backend marks them HTTP-only),
//! `localStorage` for bearer tokens, and an in-memory slot for tests and
//! non-browser builds. Every read fails soft to `None`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex};

use crate::config::AuthTransport;

/// Fixed name of the cookie and `localStorage` slot holding the token.
pub const AUTH_TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn set_token(&self, token: &str);
    /// Stored token, or `None` when storage is empty or unavailable.
    fn get_token(&self) -> Option<String>;
    /// Remove any stored token. Idempotent.
    fn clear_token(&self);
}

/// Pick the store matching the deployment's auth transport.
pub fn token_store_for(transport: AuthTransport) -> Arc<dyn TokenStore> {
    match transport {
        AuthTransport::Cookie => Arc::new(CookieTokenStore),
        AuthTransport::Bearer => Arc::new(LocalStorageTokenStore),
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn get_token(&self) -> Option<String> {
        let slot = self.slot.lock().ok()?;
        non_empty(slot.as_deref())
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Bearer-transport store backed by `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn set_token(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn get_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(AUTH_TOKEN_KEY).ok().flatten();
            non_empty(raw.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(AUTH_TOKEN_KEY);
            }
        }
    }
}

/// Cookie-transport store: reads the backend-managed `token` cookie and
/// expires it on logout, but never writes one.
///
/// HTTP-only cookies never show up here; the session verifier covers that case.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl TokenStore for CookieTokenStore {
    /// No-op: in cookie mode the backend sets the cookie on login.
    fn set_token(&self, _token: &str) {}

    fn get_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document()?.cookie().ok()?;
            cookie_value(&cookies, AUTH_TOKEN_KEY)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&expired_token_cookie());
            }
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Find cookie `name` in a `document.cookie` string (`a=1; b=2`).
#[cfg(any(test, feature = "csr"))]
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .find_map(|(_, value)| {
            let decoded = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
            non_empty(Some(decoded.as_str()))
        })
}

#[cfg(any(test, feature = "csr"))]
fn expired_token_cookie() -> String {
    format!("{AUTH_TOKEN_KEY}=; path=/; max-age=0; SameSite=Lax")
}
