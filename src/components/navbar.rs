//! Top navigation bar.
//!
//! Shows login/signup links to guests and the job/profile links plus a
//! logout button to signed-in users. Logout always ends the local session,
//! even if the backend call fails.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::util::auth::{HOME_ROUTE, LOGIN_ROUTE};

const GUEST_LINKS: [(&str, &str); 2] = [("Login", LOGIN_ROUTE), ("Sign Up", "/signup")];
const MEMBER_LINKS: [(&str, &str); 3] = [("All jobs", HOME_ROUTE), ("Add job", "/jobs/new"), ("Profile", "/update-profile")];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let on_logout = Callback::new(move |()| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            api.logout().await;
            auth.update(|a| a.sync(api.session()));
            #[cfg(feature = "csr")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN_ROUTE);
            }
        });
    });

    let links = |links: &[(&'static str, &'static str)]| {
        links
            .iter()
            .map(|(label, href)| view! { <a class="navbar__link" href=*href>{*label}</a> })
            .collect_view()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=HOME_ROUTE>"Jobify"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.with(|a| a.authenticated)
                fallback=move || view! { <nav class="navbar__links">{links(&GUEST_LINKS)}</nav> }
            >
                <nav class="navbar__links">
                    {links(&MEMBER_LINKS)}
                    <span class="navbar__user">
                        {move || auth.with(|a| a.display_name().map(str::to_owned)).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
