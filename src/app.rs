//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the config, session, and API client once, provides them and the
//! render-facing state signals through Leptos context, starts the one
//! startup session check, and wraps every route in the gate that guards it.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::Gated;
use crate::components::navbar::Navbar;
use crate::components::notices::NoticeHost;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    create_job::CreateJobPage, home::HomePage, job_detail::JobDetailPage, login::LoginPage, profile::ProfilePage,
    signup::SignupPage,
};
use crate::state::auth::{AuthState, restore_session};
use crate::state::notices::NoticeState;
use crate::state::session::SessionContext;
use crate::util::auth::RouteGate;
use crate::util::token_store::token_store_for;

/// Fetch the signed-in user for display. Failures are logged and ignored.
pub fn load_current_user(api: ApiClient, auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        match api.current_user().await {
            Ok(user) => {
                auth.try_update(|a| a.user = Some(user));
            }
            Err(e) => log::debug!("current user unavailable: {e}"),
        }
    });
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::info!("api base {} ({:?} auth)", config.api_base_url, config.auth_transport);
    let session = SessionContext::new(token_store_for(config.auth_transport));
    let api = ApiClient::new(config.clone(), session.clone());

    let auth = RwSignal::new(AuthState::pending(&session));
    let notices = RwSignal::new(NoticeState::default());

    provide_context(config);
    provide_context(session.clone());
    provide_context(api.clone());
    provide_context(auth);
    provide_context(notices);

    leptos::task::spawn_local(async move {
        let probe_api = api.clone();
        let authenticated = restore_session(&session, || async move { probe_api.current_user().await }).await;
        auth.update(|a| a.finish_verification(&session));
        if authenticated {
            load_current_user(api, auth);
        }
    });

    let authenticated = RouteGate::authenticated();
    let guest = RouteGate::guest();

    view! {
        <Title text="Jobify"/>

        <Router>
            <Navbar/>
            <NoticeHost/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                    <Route
                        path=StaticSegment("")
                        view=move || view! { <Gated gate=authenticated><HomePage/></Gated> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=move || view! { <Gated gate=guest><LoginPage/></Gated> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=move || view! { <Gated gate=guest><SignupPage/></Gated> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("new"))
                        view=move || view! { <Gated gate=authenticated><CreateJobPage/></Gated> }
                    />
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("id"))
                        view=move || view! { <Gated gate=authenticated><JobDetailPage/></Gated> }
                    />
                    <Route
                        path=StaticSegment("update-profile")
                        view=move || view! { <Gated gate=authenticated><ProfilePage/></Gated> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
