//! Signup page: register, then sign straight in with the same credentials.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::load_current_user;
use crate::components::field::TextField;
use crate::components::notices::notify;
use crate::net::api::ApiClient;
use crate::net::types::SignupForm;
use crate::state::auth::AuthState;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::util::auth::LOGIN_ROUTE;
use crate::util::validation::{FieldErrors, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let signup = form.get_untracked();
        let found = validate_signup(&signup);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api.register(&signup).await {
                notify(notices, NoticeKind::Error, e.to_string());
                busy.set(false);
                return;
            }
            notify(notices, NoticeKind::Success, "Account created successfully.");
            match api.login(&signup.credentials()).await {
                Ok(()) => {
                    auth.update(|a| a.sync(api.session()));
                    load_current_user(api, auth);
                }
                Err(e) => {
                    log::warn!("login after signup failed: {e}");
                    notify(notices, NoticeKind::Info, "Please sign in with your new account.");
                    navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
            busy.set(false);
        });
    };

    let error = |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign up"</h1>
                <TextField
                    label="Name"
                    autocomplete="given-name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    error=error("name")
                />
                <TextField
                    label="Email"
                    kind="email"
                    autocomplete="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    error=error("email")
                />
                <TextField
                    label="Password"
                    kind="password"
                    autocomplete="new-password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                    error=error("password")
                />
                <TextField
                    label="Last name (optional)"
                    autocomplete="family-name"
                    value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.last_name = v))
                    error=error("lastName")
                />
                <TextField
                    label="Location"
                    autocomplete="address-level2"
                    value=Signal::derive(move || form.with(|f| f.location.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.location = v))
                    error=error("location")
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                </button>
                <p class="auth-card__switch">"Already a member? " <a href=LOGIN_ROUTE>"Login"</a></p>
            </form>
        </div>
    }
}
