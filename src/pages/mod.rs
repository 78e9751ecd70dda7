//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation, notices)
//! and delegates rendering details to `components`. Access control is applied
//! around pages in `app.rs`, never inside them.

pub mod create_job;
pub mod home;
pub mod job_detail;
pub mod login;
pub mod profile;
pub mod signup;
