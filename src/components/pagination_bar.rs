//! Pagination Bar Component
//!
//! First / previous / page numbers / next / last. Long runs of pages are
//! folded into gaps around the current page.

use leptos::prelude::*;
use recipe_core::{PageItem, PageView};

#[component]
pub fn PaginationBar(
    pages: Memo<PageView>,
    on_select: impl Fn(usize) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let page = move || pages.with(|pages| pages.page);
    let current = move || pages.with_untracked(|pages| pages.page);
    let at_start = move || !pages.with(PageView::has_previous);
    let at_end = move || !pages.with(PageView::has_next);

    view! {
        <Show when=move || pages.with(|pages| pages.total_pages > 1)>
            <nav class="pagination">
                <button disabled=at_start on:click=move |_| on_select(1)>"First"</button>
                <button disabled=at_start on:click=move |_| on_select(current().saturating_sub(1))>
                    "Previous"
                </button>
                {move || {
                    pages.with(PageView::page_items)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(number) => view! {
                                <button
                                    class=move || if page() == number { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| on_select(number)
                                >
                                    {number}
                                </button>
                            }
                            .into_any(),
                            PageItem::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button disabled=at_end on:click=move |_| on_select(current() + 1)>
                    "Next"
                </button>
                <button disabled=at_end on:click=move |_| on_select(pages.with_untracked(|pages| pages.total_pages))>
                    "Last"
                </button>
            </nav>
        </Show>
    }
}
