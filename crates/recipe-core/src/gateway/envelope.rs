//! Response envelopes: `{ "meals": [...] | null }` and
//! `{ "categories": [...] | null }`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Category, Recipe};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

impl MealsEnvelope {
    /// `None` when the payload carried no `meals` at all. Records that fail
    /// to decode are skipped rather than failing the whole response.
    pub(crate) fn into_recipes(self) -> Option<Vec<Recipe>> {
        let meals = self.meals?;
        let recipes = meals
            .into_iter()
            .filter_map(|meal| match serde_json::from_value::<Recipe>(meal) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed recipe record");
                    None
                }
            })
            .collect();
        Some(recipes)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

impl CategoriesEnvelope {
    pub(crate) fn into_categories(self) -> Vec<Category> {
        self.categories.unwrap_or_default()
    }
}
