//! Favorites
//!
//! - storage: key-value persistence trait and the in-memory store
//! - store: the observable favorites collection
//! - ingredients: combined ingredient list across favorites

mod ingredients;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use ingredients::{combined_ingredients, normalize_ingredient};
pub use storage::{KeyValueStore, MemoryStore, FAVORITES_KEY, SELECTED_RECIPES_KEY};
pub use store::{FavoritesStore, SubscriptionId};
