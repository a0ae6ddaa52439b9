//! Recipe Detail Page
//!
//! `/recipe/:id`: loading, not-found and full detail states.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::FavoriteButton;
use crate::context::use_app_context;
use crate::models::{recipe_id_from_segment, IngredientLine, Recipe, RecipeId};

#[component]
pub fn RecipePage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let recipe_id =
        Memo::new(move |_| recipe_id_from_segment(&params.read().get("id").unwrap_or_default()));
    let detail = RwSignal::new(None::<(RecipeId, Option<Recipe>)>);

    Effect::new(move |_| {
        let id = recipe_id.get();
        let (cached, fresh) = ctx.queries().revalidate_recipe(&id);
        if let Some(found) = cached {
            detail.set(Some((id.clone(), found)));
        }
        spawn_local(async move {
            let found = fresh.await;
            if recipe_id.try_get_untracked().as_ref() == Some(&id) {
                detail.try_set(Some((id, found)));
            }
        });
    });

    view! {
        <div class="recipe-page">
            {move || {
                let current = recipe_id.get();
                match detail.get() {
                    Some((id, Some(recipe))) if id == current => {
                        view! { <RecipeDetail recipe=recipe /> }.into_any()
                    }
                    Some((id, None)) if id == current => {
                        view! { <p class="empty-state">"Recipe not found"</p> }.into_any()
                    }
                    _ => view! { <div class="loading">"Loading recipe..."</div> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn RecipeDetail(recipe: Recipe) -> impl IntoView {
    let ingredients: Vec<String> = recipe
        .ingredients()
        .iter()
        .filter_map(IngredientLine::label)
        .collect();
    let tags = recipe.tags().join(", ");
    let name = recipe.name.clone();
    let alt = recipe.name.clone();
    let thumbnail = recipe.thumbnail.clone();
    let category = recipe.category.clone();
    let area = recipe.area.clone();
    let instructions = recipe.instructions.clone();
    let video = recipe.video().map(str::to_string);

    view! {
        <article class="recipe-detail">
            <img class="recipe-detail-image" src=thumbnail alt=alt />
            <h1>{name}</h1>
            <p class="recipe-meta"><strong>"Category: "</strong>{category}</p>
            <p class="recipe-meta"><strong>"Area: "</strong>{area}</p>
            {(!tags.is_empty()).then(|| view! {
                <p class="recipe-tags"><strong>"Tags: "</strong>{tags}</p>
            })}

            <h2>"Ingredients"</h2>
            <ul class="ingredient-list">
                {ingredients.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>

            <FavoriteButton recipe=recipe />

            {video.map(|url| view! {
                <a class="video-link" href=url target="_blank" rel="noopener noreferrer">
                    "Watch on YouTube"
                </a>
            })}

            <h2>"Instructions"</h2>
            <p class="instructions">{instructions}</p>
        </article>
    }
}
