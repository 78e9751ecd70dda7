//! Profile page: edit name, email, last name, location, and avatar.
//!
//! Submission failures are shown inline above the button; the form stays
//! editable. A successful save re-reads the user so the avatar URL and the
//! navbar name reflect what the backend stored.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::field::TextField;
use crate::components::notices::notify;
use crate::net::api::ApiClient;
use crate::net::types::{ProfileForm, Upload};
use crate::state::auth::AuthState;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::util::generation::RequestGeneration;
use crate::util::validation::{FieldErrors, validate_profile};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let form = RwSignal::new(ProfileForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let avatar_url = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let avatar_ref = NodeRef::<leptos::html::Input>::new();

    let generation = RequestGeneration::new();
    let retire = generation.clone();
    on_cleanup(move || retire.retire());

    {
        let api = api.clone();
        let generation = generation.clone();
        let ticket = generation.begin();
        leptos::task::spawn_local(async move {
            let result = api.current_user().await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(user) => {
                    form.set(user.to_form());
                    avatar_url.set(user.avatar_url().map(str::to_owned));
                    auth.update(|a| a.user = Some(user));
                }
                Err(e) => {
                    log::warn!("failed to load profile: {e}");
                    message.set(Some("Failed to load profile".to_owned()));
                }
            }
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || loading.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        let found = validate_profile(&values);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        #[cfg(feature = "csr")]
        let avatar = avatar_ref.get_untracked().and_then(|input| Upload::from_input(&input));
        #[cfg(not(feature = "csr"))]
        let avatar: Option<Upload> = None;

        busy.set(true);
        message.set(None);
        let api = api.clone();
        let generation = generation.clone();
        let ticket = generation.begin();
        leptos::task::spawn_local(async move {
            let result = api.update_user(&values, avatar.as_ref()).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(user) => {
                    avatar_url.set(user.avatar_url().map(str::to_owned));
                    form.set(user.to_form());
                    auth.update(|a| a.user = Some(user));
                    notify(notices, NoticeKind::Success, "Profile updated.");
                }
                Err(e) => message.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let error = |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    view! {
        <div class="form-page">
            <form class="form-card profile" on:submit=on_submit>
                <h1>"Profile"</h1>
                <Show when=move || loading.get()>
                    <p class="page-status">"Loading profile..."</p>
                </Show>
                <div class="profile__avatar">
                    {move || match avatar_url.get() {
                        Some(src) => view! { <img src=src alt="Profile photo"/> }.into_any(),
                        None => view! { <span class="profile__avatar-empty">"No photo"</span> }.into_any(),
                    }}
                </div>
                <label class="field">
                    <span class="field__label">"Photo"</span>
                    <input class="field__input" type="file" accept="image/*" node_ref=avatar_ref/>
                </label>
                <TextField
                    label="Name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    error=error("name")
                />
                <TextField
                    label="Last name"
                    value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.last_name = v))
                    error=error("lastName")
                />
                <TextField
                    label="Email"
                    kind="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    error=error("email")
                />
                <TextField
                    label="Location"
                    value=Signal::derive(move || form.with(|f| f.location.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.location = v))
                    error=error("location")
                />
                <Show when=move || message.with(Option::is_some)>
                    <p class="form-message form-message--error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get() || loading.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
