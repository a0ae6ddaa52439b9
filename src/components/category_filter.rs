//! Category Filter Component
//!
//! Dropdown of API categories. The empty value means no filter.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryFilter(
    selected: Signal<String>,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="category-filter"
            prop:value=move || selected.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"All Categories"</option>
            <For
                each=move || store.categories().get()
                key=|category| category.name.clone()
                children=move |category| {
                    let name = category.name.clone();
                    let label = name.clone();
                    view! { <option value=name>{label}</option> }
                }
            />
        </select>
    }
}
