//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and URL concerns from page and component
//! logic so the rules (gates, query canonicalization, debouncing, stale
//! response discard) can be unit tested without a DOM.

pub mod auth;
pub mod debounce;
pub mod generation;
pub mod list_query;
pub mod pagination;
pub mod token_store;
pub mod validation;
