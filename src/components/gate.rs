//! Conditional-render wrapper applying a `RouteGate` to its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every routed page in `app.rs`. While the startup session check is
//! outstanding it renders a neutral placeholder instead of deciding, so a
//! returning user with a valid cookie is never bounced to the login page.
//! After that the decision is recomputed whenever the location or the
//! `AuthState` signal changes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::session::SessionContext;
use crate::util::auth::{GateDecision, RouteGate, current_location};

#[component]
pub fn Gated(gate: RouteGate, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionContext>();
    let location = use_location();

    let decision = move || {
        if auth.with(|a| a.verifying) {
            return None;
        }
        let here = current_location(&location.pathname.get(), &location.search.get());
        Some(gate.evaluate(&session, &here))
    };

    view! {
        {move || match decision() {
            None => view! { <p class="page-status">"Checking session..."</p> }.into_any(),
            Some(GateDecision::Admit) => children().into_any(),
            Some(GateDecision::Redirect(path)) => {
                log::debug!("gate redirect -> {path}");
                view! { <Redirect path=path/> }.into_any()
            }
        }}
    }
}
