//! Page-number control under the job list.
//!
//! Hidden when there is at most one page. Buttons report the chosen page
//! through `on_page`; the list page turns that into a URL update.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::pagination::{PageItem, has_next, has_previous, page_window};

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let items = move || page_window(current.get(), total.get());

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || !has_previous(current.get())
                    on:click=move |_| on_page.run(current.get_untracked().saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                {move || {
                    items()
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => {
                                let active = current.get_untracked() == page;
                                view! {
                                    <button
                                        class="pagination__page"
                                        class:pagination__page--active=active
                                        aria-current=if active { Some("page") } else { None }
                                        on:click=move |_| on_page.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any()
                            }
                            PageItem::Ellipsis => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__step"
                    disabled=move || !has_next(current.get(), total.get())
                    on:click=move |_| on_page.run(current.get_untracked().saturating_add(1).min(total.get_untracked()))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
