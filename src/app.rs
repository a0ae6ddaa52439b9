//! Recipe Box App
//!
//! Builds the shared services once, provides them via context and routes
//! between the three screens.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;
use recipe_core::{CatalogConfig, ConfigError, FavoritesStore, MealDbClient, RecipeQueries};

use crate::context::AppContext;
use crate::pages::{CatalogPage, FavoritesPage, RecipePage};
use crate::storage::BrowserStorage;
use crate::store::AppState;

/// Defaults overridden by build-time environment variables.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    CatalogConfig::with_overrides(
        option_env!("RECIPE_BOX_API_URL"),
        option_env!("RECIPE_BOX_PAGE_SIZE"),
        option_env!("RECIPE_BOX_LOG"),
    )
}

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let client = match MealDbClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "cannot reach the recipe API");
            return view! { <p class="fatal">"Recipe Box is misconfigured: " {e.to_string()}</p> }
                .into_any();
        }
    };
    tracing::info!(api = %client.base_url(), page_size = config.page_size, "starting");

    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    let favorites = FavoritesStore::open(BrowserStorage);
    let ctx = AppContext::new(config, RecipeQueries::new(client), favorites, store);
    provide_context(ctx);

    // Another tab changed storage: last writer wins
    let storage_handle = window_event_listener(ev::storage, move |_| ctx.reload_favorites());
    on_cleanup(move || storage_handle.remove());

    view! {
        <Router>
            <nav class="navbar">
                <span class="brand">"Recipe Box"</span>
                <A href="/">"Home"</A>
                <A href="/favorites">"Favorites"</A>
            </nav>
            <main class="container">
                <Routes fallback=|| view! { <p class="empty-state">"Page not found"</p> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/recipe/:id") view=RecipePage />
                    <Route path=path!("/favorites") view=FavoritesPage />
                    // Older bookmarks point here
                    <Route path=path!("/selected") view=FavoritesPage />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
