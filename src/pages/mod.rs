//! Screens, one per route.

mod catalog;
mod favorites;
mod recipe;

pub use catalog::CatalogPage;
pub use favorites::FavoritesPage;
pub use recipe::RecipePage;
