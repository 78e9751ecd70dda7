//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so deployment settings are read
//! with `option_env!` when the crate is compiled and parsed by the pure
//! helpers below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "/api/v1";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 800;

/// How the auth token reaches the backend. A deployment uses exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTransport {
    /// Backend-managed cookie sent automatically with credentialed requests.
    #[default]
    Cookie,
    /// Client-stored token attached as `Authorization: Bearer <token>`.
    Bearer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub auth_transport: AuthTransport,
    pub search_debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ClientConfig {
    /// Build typed config from compile-time environment variables.
    ///
    /// Optional:
    /// - `JOBIFY_API_URL`: backend base URL, default `/api/v1`
    /// - `JOBIFY_AUTH_TRANSPORT`: `cookie` (default) or `bearer`
    /// - `JOBIFY_SEARCH_DEBOUNCE_MS`: default 800
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOBIFY_API_URL"),
            option_env!("JOBIFY_AUTH_TRANSPORT"),
            option_env!("JOBIFY_SEARCH_DEBOUNCE_MS"),
        )
    }

    pub fn from_values(api_url: Option<&str>, transport: Option<&str>, debounce_ms: Option<&str>) -> Self {
        Self {
            api_base_url: parse_api_url(api_url),
            auth_transport: parse_auth_transport(transport),
            search_debounce_ms: debounce_ms
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }

    /// Absolute or root-relative URL for a backend path such as `/jobs`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn parse_api_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse the auth transport name, falling back to cookie transport.
pub fn parse_auth_transport(raw: Option<&str>) -> AuthTransport {
    match raw.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        None | Some("" | "cookie") => AuthTransport::Cookie,
        Some("bearer") => AuthTransport::Bearer,
        Some(other) => {
            log::warn!("unknown JOBIFY_AUTH_TRANSPORT '{other}', using cookie transport");
            AuthTransport::Cookie
        }
    }
}
