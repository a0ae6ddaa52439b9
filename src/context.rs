//! Application Context
//!
//! Services built once by `App` and shared with every screen via the
//! Leptos Context API.

use leptos::prelude::*;
use recipe_core::{CatalogConfig, FavoritesStore, MealDbClient, Pagination, RecipeQueries};

use crate::models::Recipe;
use crate::storage::BrowserStorage;
use crate::store::{store_set_favorites, AppStore};

pub type Queries = RecipeQueries<MealDbClient>;
pub type Favorites = FavoritesStore<BrowserStorage>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Deduplicating query cache in front of the recipe API
    queries: StoredValue<Queries, LocalStorage>,
    /// The single favorites store; its listener keeps `store` in sync
    favorites: StoredValue<Favorites, LocalStorage>,
    /// Validated configuration
    config: StoredValue<CatalogConfig>,
    /// Reactive snapshot state
    pub store: AppStore,
}

impl AppContext {
    pub fn new(config: CatalogConfig, queries: Queries, mut favorites: Favorites, store: AppStore) -> Self {
        store_set_favorites(&store, favorites.recipes());
        favorites.subscribe(move |recipes| store_set_favorites(&store, recipes));

        Self {
            queries: StoredValue::new_local(queries),
            favorites: StoredValue::new_local(favorites),
            config: StoredValue::new(config),
            store,
        }
    }

    /// A handle to the query cache. Clones share the cache.
    pub fn queries(&self) -> Queries {
        self.queries.get_value()
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    pub fn pagination(&self) -> Pagination {
        self.config.with_value(|config| Pagination::new(config.page_size))
    }

    /// Add or remove `recipe`; every screen sees the change through the store.
    pub fn toggle_favorite(&self, recipe: &Recipe) {
        self.favorites.update_value(|favorites| match favorites.toggle(recipe) {
            Ok(true) => tracing::info!(id = %recipe.id, "added to favorites"),
            Ok(false) => tracing::info!(id = %recipe.id, "removed from favorites"),
            Err(e) => tracing::error!(id = %recipe.id, error = %e, "favorite not saved"),
        });
    }

    /// Pick up writes made by another tab.
    pub fn reload_favorites(&self) {
        self.favorites.update_value(|favorites| favorites.reload());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
