//! Login page with email + password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guest-only route. On success the page only updates the session and
//! `AuthState`; the surrounding guest gate then redirects to the location
//! carried in `from` (or home).

use leptos::prelude::*;

use crate::app::load_current_user;
use crate::components::notices::notify;
use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::util::validation::{FieldErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let form = RwSignal::new(Credentials::default());
    let errors = RwSignal::new(FieldErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = form.get_untracked();
        let found = validate_login(&credentials);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        message.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&credentials).await {
                Ok(()) => {
                    auth.update(|a| a.sync(api.session()));
                    notify(notices, NoticeKind::Success, "Logged in");
                    load_current_user(api, auth);
                }
                Err(e) => {
                    message.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field)).unwrap_or_default();

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="field__input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <span class="field__error">{field_error("email")}</span>
                </label>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <span class="field__error">{field_error("password")}</span>
                </label>
                <Show when=move || message.with(Option::is_some)>
                    <p class="form-message form-message--error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-card__switch">"Not a member yet? " <a href="/signup">"Sign up"</a></p>
            </form>
        </div>
    }
}
