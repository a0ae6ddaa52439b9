//! Search Bar Component
//!
//! Text field whose value updates on every keystroke, plus a clear button.
//! Debouncing is the caller's business.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    value: Signal<String>,
    on_input: impl Fn(String) + Copy + Send + Sync + 'static,
    on_clear: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search for recipes..."
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button type="button" class="search-clear" on:click=move |_| on_clear()>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
