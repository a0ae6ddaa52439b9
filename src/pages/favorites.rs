//! Favorites Page
//!
//! Every favorite with its instructions, plus one combined ingredient list.

use leptos::prelude::*;
use recipe_core::favorites::combined_ingredients;

use crate::components::FavoriteButton;
use crate::models::{recipe_href, Recipe};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_app_store();
    let shopping_list = Memo::new(move |_| store.favorites().with(|favorites| combined_ingredients(favorites)));

    view! {
        <div class="favorites-page">
            <h1>"Your Favorite Recipes"</h1>
            <Show
                when=move || !store.favorites().with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"You have no favorite recipes yet."</p> }
            >
                <div class="favorites-list">
                    <For
                        each=move || store.favorites().get()
                        key=|recipe| recipe.id.clone()
                        children=|recipe| view! { <FavoriteCard recipe=recipe /> }
                    />
                </div>

                <section class="combined-ingredients">
                    <h2>"Ingredients for all selected recipes"</h2>
                    <ul>
                        <For
                            each=move || shopping_list.get()
                            key=|name| name.clone()
                            children=|name| view! { <li>{name}</li> }
                        />
                    </ul>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn FavoriteCard(recipe: Recipe) -> impl IntoView {
    let href = recipe_href(&recipe.id);
    let name = recipe.name.clone();
    let alt = recipe.name.clone();
    let thumbnail = recipe.thumbnail.clone();
    let instructions = recipe.instructions.clone();

    view! {
        <div class="favorite-card">
            <img src=thumbnail alt=alt />
            <div class="favorite-card-body">
                <h3>{name}</h3>
                <a href=href class="view-recipe">"View Recipe"</a>
                <p class="instructions">{instructions}</p>
                <FavoriteButton recipe=recipe />
            </div>
        </div>
    }
}
