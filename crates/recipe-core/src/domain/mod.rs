//! Domain Layer
//!
//! Recipe and category entities as the rest of the app sees them.
//! The API's flat record layout is translated here and nowhere else.

mod category;
mod entity;
mod recipe;

pub use category::Category;
pub use entity::{retain_unique, Entity};
pub use recipe::{IngredientLine, Recipe, RecipeId, MAX_INGREDIENT_SLOTS};
