//! Search, filter, sort, and page-size controls above the job list.
//!
//! DESIGN
//! ======
//! The URL is the source of truth; this component only proposes
//! `ListQueryUpdate`s through `on_change`. The search box is the exception:
//! it echoes keystrokes immediately from a local signal and commits to the
//! URL only after the input has been idle for the debounce delay.

use leptos::prelude::*;

use crate::net::types::{JOB_STATUSES, JOB_TYPES};
use crate::util::debounce::SearchDebounce;
use crate::util::list_query::{ALLOWED_LIMITS, ListQuery, ListQueryUpdate, SORT_OPTIONS, search_commit};

#[component]
pub fn JobFilters(
    #[prop(into)] query: Signal<ListQuery>,
    on_change: Callback<ListQueryUpdate>,
    debounce_ms: u32,
) -> impl IntoView {
    let search_text = RwSignal::new(query.get_untracked().search);
    let debounce = SearchDebounce::new(debounce_ms);

    // Follow URL changes (back button, clear) unless the user is mid-edit.
    let debounce_sync = debounce.clone();
    Effect::new(move || {
        let committed = query.with(|q| q.search.clone());
        if !debounce_sync.is_pending() && search_text.get_untracked() != committed {
            search_text.set(committed);
        }
    });

    let debounce_input = debounce.clone();
    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_text.set(value.clone());
        debounce_input.input(value, move |committed| {
            if let Some(update) = query.with_untracked(|q| search_commit(q, committed)) {
                on_change.run(update);
            }
        });
    };

    let on_clear = move |_| {
        debounce.cancel();
        search_text.set(String::new());
        on_change.run(ListQueryUpdate::clear_all());
    };

    view! {
        <section class="job-filters">
            <input
                class="job-filters__search"
                type="search"
                placeholder="Search position or company"
                prop:value=move || search_text.get()
                on:input=on_search
            />
            <select
                class="job-filters__select"
                aria-label="Status"
                prop:value=move || query.with(|q| q.job_status.clone())
                on:change=move |ev| on_change.run(ListQueryUpdate::job_status(event_target_value(&ev)))
            >
                <option value="">"All statuses"</option>
                {JOB_STATUSES.map(|s| view! { <option value=s>{s}</option> }).collect_view()}
            </select>
            <select
                class="job-filters__select"
                aria-label="Job type"
                prop:value=move || query.with(|q| q.job_type.clone())
                on:change=move |ev| on_change.run(ListQueryUpdate::job_type(event_target_value(&ev)))
            >
                <option value="">"All types"</option>
                {JOB_TYPES.map(|t| view! { <option value=t>{t}</option> }).collect_view()}
            </select>
            <select
                class="job-filters__select"
                aria-label="Sort"
                prop:value=move || query.with(|q| q.sort.clone())
                on:change=move |ev| on_change.run(ListQueryUpdate::sort(event_target_value(&ev)))
            >
                {SORT_OPTIONS.map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
            </select>
            <select
                class="job-filters__select"
                aria-label="Per page"
                prop:value=move || query.with(|q| q.limit.to_string())
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(ListQueryUpdate::limit(limit));
                    }
                }
            >
                {ALLOWED_LIMITS
                    .map(|n| view! { <option value=n.to_string()>{format!("{n} per page")}</option> })
                    .collect_view()}
            </select>
            <button
                class="btn job-filters__clear"
                disabled=move || !query.with(ListQuery::is_customized)
                on:click=on_clear
            >
                "Clear filters"
            </button>
        </section>
    }
}
