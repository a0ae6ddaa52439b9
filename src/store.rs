//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The favorites
//! field mirrors the favorites store and is refreshed by its listener.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Recipe, RecipeId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Favorite recipes, in the order they were added
    pub favorites: Vec<Recipe>,
    /// Categories for the catalog filter
    pub categories: Vec<Category>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the favorites snapshot
pub fn store_set_favorites(store: &AppStore, recipes: &[Recipe]) {
    *store.favorites().write() = recipes.to_vec();
}

/// Whether a recipe is in the favorites snapshot (tracked)
pub fn store_is_favorite(store: &AppStore, id: &RecipeId) -> bool {
    store
        .favorites()
        .with(|favorites| favorites.iter().any(|recipe| &recipe.id == id))
}
