//! Job list page: filters, results, and pagination driven by the URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Every list parameter lives in the query
//! string, so the page parses the current location, fetches, and renders;
//! controls never touch local state, they navigate to a new query.
//!
//! DESIGN
//! ======
//! Each fetch takes a ticket from a per-mount `RequestGeneration`. A response
//! is applied only if its ticket is still current, so a slow response for an
//! older query never overwrites a newer one, and `on_cleanup` retires the
//! generation so responses arriving after the page unmounts are dropped.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::job_card::JobCard;
use crate::components::job_filters::JobFilters;
use crate::components::pagination::Pagination;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::job_list::JobListState;
use crate::util::generation::RequestGeneration;
use crate::util::list_query::{ListQuery, ListQueryUpdate, update_params};

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let query = Memo::new(move |_| ListQuery::parse(&location.search.get()));
    let state = RwSignal::new(JobListState::default());
    let generation = RequestGeneration::new();

    let retire = generation.clone();
    on_cleanup(move || retire.retire());

    Effect::new(move || {
        let params = query.get();
        let ticket = generation.begin();
        state.update(|s| s.begin(ticket));
        log::debug!("loading jobs: {}", params.to_api_query());

        let api = api.clone();
        let generation = generation.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_jobs(&params).await;
            if !generation.is_current(ticket) {
                log::debug!("dropping job list response for superseded query");
                return;
            }
            if result.as_ref().err().and_then(|e| e.status()) == Some(401) {
                api.session().mark_inactive();
                auth.update(|a| a.sync(api.session()));
            }
            state.try_update(|s| s.resolve(ticket, result));
        });
    });

    let on_change = Callback::new(move |update: ListQueryUpdate| {
        let next = update_params(&location.search.get_untracked(), &update);
        let path = location.pathname.get_untracked();
        let href = if next.is_empty() { path } else { format!("{path}?{next}") };
        navigate(&href, NavigateOptions::default());
    });
    let on_page = Callback::new(move |page: u32| on_change.run(ListQueryUpdate::page(page)));

    let total_pages = Signal::derive(move || state.with(|s| s.data.as_ref().map_or(0, |d| d.num_of_pages)));
    let current_page = Signal::derive(move || query.with(|q| q.page));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"All Jobs"</h1>
                <a class="btn btn--primary" href="/jobs/new">"Create Job"</a>
            </header>
            <JobFilters query=query on_change=on_change debounce_ms=config.search_debounce_ms/>
            <Show when=move || state.with(|s| s.notice().is_some())>
                <div class="banner banner--error" role="alert">
                    <span>{move || state.with(|s| s.notice().map(str::to_owned)).unwrap_or_default()}</span>
                    <button class="banner__dismiss" on:click=move |_| state.update(JobListState::dismiss_error)>
                        "Dismiss"
                    </button>
                </div>
            </Show>
            {move || {
                state.with(|s| {
                    if s.blocking_loading() {
                        return view! { <p class="page-status">"Loading jobs..."</p> }.into_any();
                    }
                    if let Some(message) = s.blocking_error() {
                        return view! { <div class="banner banner--error">{message.to_owned()}</div> }.into_any();
                    }
                    let Some(page) = s.data.as_ref() else {
                        return ().into_any();
                    };
                    if page.jobs.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No jobs found."</p>
                                <a href="/jobs/new">"Create your first job"</a>
                            </div>
                        }
                        .into_any();
                    }
                    let summary = format!("{} job{} found", page.total_jobs, if page.total_jobs == 1 { "" } else { "s" });
                    let cards = page.jobs.iter().cloned().map(|job| view! { <JobCard job=job/> }).collect_view();
                    view! {
                        <p class="home-page__summary" class:home-page__summary--refreshing=s.is_refreshing()>
                            {summary}
                        </p>
                        <div class="job-grid" class:job-grid--refreshing=s.is_refreshing()>{cards}</div>
                    }
                    .into_any()
                })
            }}
            <Pagination current=current_page total=total_pages on_page=on_page/>
        </div>
    }
}
