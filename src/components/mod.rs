//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod favorite_button;
mod pagination_bar;
mod recipe_card;
mod search_bar;

pub use category_filter::CategoryFilter;
pub use favorite_button::FavoriteButton;
pub use pagination_bar::PaginationBar;
pub use recipe_card::RecipeCard;
pub use search_bar::SearchBar;
