//! Shopping list across favorites.

use std::collections::HashSet;

use crate::domain::Recipe;

/// Lower-case, collapse inner whitespace, trim. `None` when nothing is left.
pub fn normalize_ingredient(name: &str) -> Option<String> {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Ingredient names of every recipe, normalized and deduplicated in
/// first-seen order. Measures are ignored.
pub fn combined_ingredients(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .flat_map(Recipe::ingredient_names)
        .filter_map(normalize_ingredient)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
