//! Shared job form used by the create and edit pages.
//!
//! Field values live in one `RwSignal<JobForm>` owned by the page; the
//! component renders inputs, per-field validation messages, and a logo picker,
//! and hands the submission back through `on_submit`.

use leptos::prelude::*;

use crate::net::types::{JOB_STATUSES, JOB_TYPES, JobForm, Upload};
use crate::util::validation::FieldErrors;

#[component]
pub fn JobFormFields(
    form: RwSignal<JobForm>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] submit_label: String,
    on_submit: Callback<Option<Upload>>,
) -> impl IntoView {
    let logo_ref = NodeRef::<leptos::html::Input>::new();
    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field)).unwrap_or_default();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        let logo = logo_ref.get_untracked().and_then(|input| Upload::from_input(&input));
        #[cfg(not(feature = "csr"))]
        let logo = {
            let _ = logo_ref;
            None
        };
        on_submit.run(logo);
    };

    view! {
        <form class="job-form" on:submit=submit>
            <label class="field">
                <span class="field__label">"Company"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || form.with(|f| f.company.clone())
                    on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                />
                <span class="field__error">{field_error("company")}</span>
            </label>
            <label class="field">
                <span class="field__label">"Position"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || form.with(|f| f.position.clone())
                    on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                />
                <span class="field__error">{field_error("position")}</span>
            </label>
            <label class="field">
                <span class="field__label">"Status"</span>
                <select
                    class="field__input"
                    prop:value=move || form.with(|f| f.job_status.clone())
                    on:change=move |ev| form.update(|f| f.job_status = event_target_value(&ev))
                >
                    {JOB_STATUSES.map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                </select>
                <span class="field__error">{field_error("jobStatus")}</span>
            </label>
            <label class="field">
                <span class="field__label">"Job type"</span>
                <select
                    class="field__input"
                    prop:value=move || form.with(|f| f.job_type.clone())
                    on:change=move |ev| form.update(|f| f.job_type = event_target_value(&ev))
                >
                    {JOB_TYPES.map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
                <span class="field__error">{field_error("jobType")}</span>
            </label>
            <label class="field">
                <span class="field__label">"Location"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || form.with(|f| f.job_location.clone())
                    on:input=move |ev| form.update(|f| f.job_location = event_target_value(&ev))
                />
                <span class="field__error">{field_error("jobLocation")}</span>
            </label>
            <label class="field">
                <span class="field__label">"Company logo"</span>
                <input class="field__input" type="file" accept="image/*" node_ref=logo_ref/>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
