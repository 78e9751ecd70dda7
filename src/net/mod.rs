//! Networking modules for the jobs REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies what can go wrong on the way.

pub mod api;
pub mod error;
pub mod types;
