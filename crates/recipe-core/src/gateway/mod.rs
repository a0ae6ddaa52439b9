//! Recipe Data Gateway
//!
//! Request/response mapping for the external recipe API. Callers get
//! values or empty sentinels, never errors; the `try_*` layer underneath is
//! public for callers that want the failure itself.

mod envelope;
mod mealdb;
mod traits;


pub use mealdb::{MealDbClient, CATALOG_LETTERS};
pub use traits::RecipeSource;
