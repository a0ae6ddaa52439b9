//! Frontend Models
//!
//! Data structures shared with the core crate.

pub use recipe_core::{Category, IngredientLine, Recipe, RecipeId};

/// Route to a recipe's detail screen.
pub fn recipe_href(id: &RecipeId) -> String {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    format!("/recipe/{}", utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC))
}

/// Recipe id from the `:id` route segment. The router has already
/// unescaped it, so it is taken verbatim.
pub fn recipe_id_from_segment(segment: &str) -> RecipeId {
    RecipeId::new(segment)
}

/// "Category - Area", skipping whichever side is blank.
pub fn recipe_subtitle(recipe: &Recipe) -> String {
    [recipe.category.as_str(), recipe.area.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" - ")
}
