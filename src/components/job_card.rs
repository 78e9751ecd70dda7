//! Card for one job in the list view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Job;

#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let href = format!("/jobs/{}", urlencoding::encode(&job.id));
    let logo = match job.logo_url() {
        Some(src) => view! { <img src=src.to_owned() alt=""/> }.into_any(),
        None => view! { <span class="job-card__initial">{job.initial()}</span> }.into_any(),
    };
    let position = if job.position.is_empty() { "Untitled".to_owned() } else { job.position };
    let status_class = format!("status status--{}", job.job_status);
    let company = (!job.company.is_empty()).then(|| view! { <p class="job-card__company">{job.company}</p> });

    view! {
        <a class="job-card" href=href>
            <span class="job-card__logo">{logo}</span>
            <span class="job-card__body">
                <span class="job-card__header">
                    <h2 class="job-card__position">{position}</h2>
                    <span class="job-card__type">{job.job_type}</span>
                </span>
                {company}
                <p class="job-card__location">{job.job_location}</p>
                <p class="job-card__status">"Status: " <span class=status_class>{job.job_status}</span></p>
            </span>
        </a>
    }
}
