//! # jobify
//!
//! Leptos + WASM frontend for the Jobify job tracker.
//!
//! This crate contains pages, components, session and list state, network
//! types, and the REST client for the external jobs backend. Browser-only
//! glue lives behind the `csr` feature; without it every module still builds
//! with inert stubs so the state logic can be unit tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("jobify client starting");
    leptos::mount::mount_to_body(app::App);
}
