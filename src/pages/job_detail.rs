//! Job detail page: view a job, edit it in place, or delete it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from a job card (`/jobs/:id`). The job is fetched on mount and
//! whenever the id changes; the same request-generation discipline as the
//! list page keeps a late response from landing after navigation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::job_form::JobFormFields;
use crate::components::notices::notify;
use crate::net::api::ApiClient;
use crate::net::types::{Job, JobForm, Upload};
use crate::state::notices::{NoticeKind, NoticeState};
use crate::util::auth::HOME_ROUTE;
use crate::util::generation::RequestGeneration;
use crate::util::validation::{FieldErrors, validate_job};

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Ready(Job),
    Failed(String),
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let job_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let job = RwSignal::new(Loaded::Pending);
    let form = RwSignal::new(JobForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let generation = RequestGeneration::new();
    let retire = generation.clone();
    on_cleanup(move || retire.retire());

    let load_api = api.clone();
    Effect::new(move || {
        let id = job_id.get();
        let ticket = generation.begin();
        job.set(Loaded::Pending);
        editing.set(false);

        let api = load_api.clone();
        let generation = generation.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_job(&id).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(found) => {
                    form.set(found.to_form());
                    job.set(Loaded::Ready(found));
                }
                Err(e) => {
                    log::warn!("failed to load job {id}: {e}");
                    job.set(Loaded::Failed("Failed to load job".to_owned()));
                }
            }
        });
    });

    let save_api = api.clone();
    let on_save = Callback::new(move |logo: Option<Upload>| {
        let values = form.get_untracked();
        let found = validate_job(&values);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        saving.set(true);

        let api = save_api.clone();
        let id = job_id.get_untracked();
        leptos::task::spawn_local(async move {
            match api.update_job(&id, &values, logo.as_ref()).await {
                Ok(updated) => {
                    form.set(updated.to_form());
                    job.try_set(Loaded::Ready(updated));
                    editing.try_set(false);
                    notify(notices, NoticeKind::Success, "Job updated.");
                }
                Err(e) => notify(notices, NoticeKind::Error, e.to_string()),
            }
            saving.try_set(false);
        });
    });

    let on_cancel_edit = move |_| {
        if let Loaded::Ready(current) = job.get_untracked() {
            form.set(current.to_form());
        }
        errors.set(FieldErrors::default());
        editing.set(false);
    };

    let on_delete = move |_| {
        if deleting.get_untracked() || !confirm_delete() {
            return;
        }
        deleting.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        let id = job_id.get_untracked();
        leptos::task::spawn_local(async move {
            match api.delete_job(&id).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Job deleted.");
                    navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    notify(notices, NoticeKind::Error, e.to_string());
                    deleting.try_set(false);
                }
            }
        });
    };

    let details = move || match job.get() {
        Loaded::Pending => view! { <p class="page-status">"Loading job..."</p> }.into_any(),
        Loaded::Failed(message) => view! { <div class="banner banner--error">{message}</div> }.into_any(),
        Loaded::Ready(current) => {
            let logo = current.logo_url().map(|src| view! { <img class="job-detail__logo" src=src.to_owned() alt=""/> });
            view! {
                <dl class="job-detail__fields">
                    <dt>"Company"</dt>
                    <dd>{current.company.clone()}</dd>
                    <dt>"Position"</dt>
                    <dd>{current.position.clone()}</dd>
                    <dt>"Status"</dt>
                    <dd class=format!("status status--{}", current.job_status)>{current.job_status.clone()}</dd>
                    <dt>"Type"</dt>
                    <dd>{current.job_type.clone()}</dd>
                    <dt>"Location"</dt>
                    <dd>{current.job_location.clone()}</dd>
                </dl>
                {logo}
            }
            .into_any()
        }
    };

    view! {
        <div class="form-page">
            <a class="back-link" href=HOME_ROUTE>"← Back to jobs"</a>
            <div class="form-card job-detail">
                <Show
                    when=move || editing.get()
                    fallback=details
                >
                    <h1>"Edit Job"</h1>
                    <JobFormFields form=form errors=errors busy=saving submit_label="Save changes" on_submit=on_save/>
                </Show>
                <Show when=move || matches!(job.get(), Loaded::Ready(_))>
                    <div class="job-detail__actions">
                        <Show when=move || !editing.get()>
                            <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                        </Show>
                        <Show when=move || editing.get()>
                            <button class="btn" on:click=on_cancel_edit>"Cancel"</button>
                        </Show>
                    </div>
                </Show>
                <button
                    class="btn btn--danger"
                    disabled=move || deleting.get() || !matches!(job.get(), Loaded::Ready(_))
                    on:click=on_delete
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete job" }}
                </button>
            </div>
        </div>
    }
}

fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this job?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}
