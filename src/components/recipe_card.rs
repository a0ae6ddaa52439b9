//! Recipe Card Component
//!
//! Grid tile on the catalog screen; the whole card links to the detail.

use leptos::prelude::*;

use crate::components::FavoriteButton;
use crate::models::{recipe_href, recipe_subtitle, Recipe};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let href = recipe_href(&recipe.id);
    let subtitle = recipe_subtitle(&recipe);
    let name = recipe.name.clone();
    let thumbnail = recipe.thumbnail.clone();
    let alt = name.clone();

    view! {
        <div class="recipe-card">
            <a href=href class="recipe-card-link">
                <img src=thumbnail alt=alt loading="lazy" />
                <h3 class="recipe-card-title">{name}</h3>
                <p class="recipe-card-meta">{subtitle}</p>
            </a>
            <FavoriteButton recipe=recipe />
        </div>
    }
}
