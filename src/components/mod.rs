//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list/form surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod field;
pub mod gate;
pub mod job_card;
pub mod job_filters;
pub mod job_form;
pub mod navbar;
pub mod notices;
pub mod pagination;
