//! Favorite Button Component
//!
//! Toggles a recipe in the shared favorites store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Recipe;
use crate::store::store_is_favorite;

#[component]
pub fn FavoriteButton(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();
    let id = recipe.id.clone();
    let is_favorite = Memo::new(move |_| store_is_favorite(&ctx.store, &id));

    view! {
        <button
            type="button"
            class=move || if is_favorite.get() { "favorite-btn active" } else { "favorite-btn" }
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                ctx.toggle_favorite(&recipe);
            }
        >
            {move || if is_favorite.get() { "Added to Favorites" } else { "Add to Favorites" }}
        </button>
    }
}
