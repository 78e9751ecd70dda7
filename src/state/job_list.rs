//! Load state for the job list view.
//!
//! DESIGN
//! ======
//! `Loading → {Loaded, Errored}`, re-entering `Loading` on every parameter
//! change. Previously loaded data is kept through later loads and errors so
//! the list never flashes empty; only the very first load blocks.
//!
//! Each load is tagged with the `RequestTicket` it was started with, and a
//! response is applied only when its ticket matches the one in flight. A slow
//! response for old parameters is therefore dropped on arrival.

#[cfg(test)]
#[path = "job_list_test.rs"]
mod job_list_test;

use crate::net::error::ApiError;
use crate::net::types::JobPage;
use crate::util::generation::RequestTicket;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Errored,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobListState {
    pub phase: LoadPhase,
    pub data: Option<JobPage>,
    pub error: Option<String>,
    in_flight: Option<RequestTicket>,
}

impl JobListState {
    /// Enter `Loading` for a new request, keeping any previous data.
    pub fn begin(&mut self, ticket: RequestTicket) {
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.in_flight = Some(ticket);
    }

    /// Apply a response. Returns `false` (state untouched) when `ticket` is
    /// not the request currently in flight.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<JobPage, ApiError>) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!("discarding stale job list response");
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                self.phase = LoadPhase::Loaded;
                self.data = Some(page);
                self.error = None;
            }
            Err(e) => {
                log::warn!("job list load failed: {e}");
                self.phase = LoadPhase::Errored;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Nothing to show yet: render a full-page spinner.
    pub fn blocking_loading(&self) -> bool {
        self.phase == LoadPhase::Loading && self.data.is_none()
    }

    /// Failed with nothing to show: render a full-page error.
    pub fn blocking_error(&self) -> Option<&str> {
        match (self.phase, &self.data) {
            (LoadPhase::Errored, None) => self.error.as_deref(),
            _ => None,
        }
    }

    /// Loading on top of visible data.
    pub fn is_refreshing(&self) -> bool {
        self.phase == LoadPhase::Loading && self.data.is_some()
    }

    /// Dismissible error shown above previously loaded data.
    pub fn notice(&self) -> Option<&str> {
        match (self.phase, &self.data) {
            (LoadPhase::Errored, Some(_)) => self.error.as_deref(),
            _ => None,
        }
    }
}
