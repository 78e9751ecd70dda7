use super::*;
use crate::net::types::Job;
use crate::util::generation::RequestGeneration;

fn page(positions: &[&str], num_of_pages: u32) -> JobPage {
    let jobs: Vec<Job> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| Job {
            id: format!("job-{i}"),
            company: "Acme".to_owned(),
            position: (*p).to_owned(),
            job_status: "pending".to_owned(),
            job_type: "full-time".to_owned(),
            job_location: "remote".to_owned(),
            company_logo: None,
            created_at: None,
        })
        .collect();
    let total_jobs = u32::try_from(jobs.len()).unwrap_or(u32::MAX);
    JobPage { jobs, num_of_pages, total_jobs }
}

#[test]
fn initial_state_is_blocking_loading() {
    let state = JobListState::default();
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(state.blocking_loading());
    assert!(!state.is_refreshing());
}

#[test]
fn first_success_loads() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();
    let ticket = generation.begin();
    state.begin(ticket);
    assert!(state.resolve(ticket, Ok(page(&["dev"], 1))));
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert!(!state.blocking_loading());
}

#[test]
fn first_failure_is_blocking_error() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();
    let ticket = generation.begin();
    state.begin(ticket);
    state.resolve(ticket, Err(ApiError::Network("offline".into())));
    assert_eq!(state.blocking_error(), Some("network error: offline"));
    assert_eq!(state.notice(), None);
}

#[test]
fn reload_keeps_previous_data_visible() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();
    let first = generation.begin();
    state.begin(first);
    state.resolve(first, Ok(page(&["dev"], 2)));

    state.begin(generation.begin());
    assert!(state.is_refreshing());
    assert!(!state.blocking_loading());
    assert_eq!(state.data.as_ref().map(|d| d.jobs.len()), Some(1));
}

#[test]
fn error_after_data_is_dismissible_notice() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();
    let first = generation.begin();
    state.begin(first);
    state.resolve(first, Ok(page(&["dev"], 2)));

    let second = generation.begin();
    state.begin(second);
    state.resolve(second, Err(ApiError::rejected(500, r#"{"msg":"boom"}"#)));
    assert_eq!(state.notice(), Some("boom"));
    assert_eq!(state.blocking_error(), None);
    assert!(state.data.is_some());

    state.dismiss_error();
    assert_eq!(state.notice(), None);
}

#[test]
fn late_page_one_response_never_replaces_page_two() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();

    let page_one = generation.begin();
    state.begin(page_one);
    let page_two = generation.begin();
    state.begin(page_two);

    assert!(!generation.is_current(page_one));
    assert!(!state.resolve(page_one, Ok(page(&["page one"], 2))));
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(state.data.is_none());

    assert!(state.resolve(page_two, Ok(page(&["page two"], 2))));
    assert!(!state.resolve(page_one, Ok(page(&["page one"], 2))));
    assert_eq!(state.data.as_ref().map(|d| d.jobs[0].position.as_str()), Some("page two"));
}

#[test]
fn stale_error_is_discarded() {
    let generation = RequestGeneration::new();
    let mut state = JobListState::default();
    let old = generation.begin();
    state.begin(old);
    let new = generation.begin();
    state.begin(new);
    assert!(!state.resolve(old, Err(ApiError::Network("timeout".into()))));
    assert_eq!(state.error, None);
    assert_eq!(state.phase, LoadPhase::Loading);
}
