//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain, thread-safe source of truth for authentication;
//! `auth`, `job_list`, and `notices` are the render-facing models that pages
//! wrap in `RwSignal`s.

pub mod auth;
pub mod job_list;
pub mod notices;
pub mod session;
