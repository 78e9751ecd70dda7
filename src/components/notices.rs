//! Toast stack and the `notify` helper pages use to feed it.

use leptos::prelude::*;

use crate::state::notices::{NOTICE_TTL_MS, NoticeKind, NoticeState};

/// Push a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    log::debug!("notice ({kind:?}): {message}");
    let Some(id) = notices.try_update(|s| s.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (id, NOTICE_TTL_MS);
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier()) role="status">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
