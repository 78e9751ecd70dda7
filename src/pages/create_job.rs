//! Create-job page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::job_form::JobFormFields;
use crate::components::notices::notify;
use crate::net::api::ApiClient;
use crate::net::types::{JobForm, Upload};
use crate::state::notices::{NoticeKind, NoticeState};
use crate::util::auth::HOME_ROUTE;
use crate::util::validation::{FieldErrors, validate_job};

#[component]
pub fn CreateJobPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(JobForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |logo: Option<Upload>| {
        let values = form.get_untracked();
        let found = validate_job(&values);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.create_job(&values, logo.as_ref()).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Job created.");
                    navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    notify(notices, NoticeKind::Error, e.to_string());
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <div class="form-page">
            <a class="back-link" href=HOME_ROUTE>"← Back to jobs"</a>
            <div class="form-card">
                <h1>"Create Job"</h1>
                <JobFormFields form=form errors=errors busy=busy submit_label="Create job" on_submit=on_submit/>
            </div>
        </div>
    }
}
