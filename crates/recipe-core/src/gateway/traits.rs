//! Gateway - Core Trait
//!
//! The sentinel contract every recipe source honors: failures are logged
//! by the implementation and come back as an empty list or `None`.

use async_trait::async_trait;

use crate::domain::{Category, Recipe, RecipeId};

/// Read-only access to the recipe catalog.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the UI thread.
#[async_trait(?Send)]
pub trait RecipeSource {
    /// Full catalog, aggregated letter by letter. Empty on failure.
    async fn list_all(&self) -> Vec<Recipe>;

    /// Free-text search. `None` when nothing matched or the request failed.
    async fn search(&self, text: &str) -> Option<Vec<Recipe>>;

    /// Single recipe lookup. `None` when unknown or the request failed.
    async fn get_by_id(&self, id: &RecipeId) -> Option<Recipe>;

    /// All categories. Empty on failure.
    async fn list_categories(&self) -> Vec<Category>;
}
