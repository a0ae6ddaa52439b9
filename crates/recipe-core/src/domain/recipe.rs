//! Recipe Entity
//!
//! The API describes a recipe as one flat record with twenty numbered
//! `strIngredientN` / `strMeasureN` slots. `Recipe` keeps an explicit
//! ordered list of ingredient lines instead, built once when the record is
//! decoded. Serialization goes back through the flat layout so persisted
//! favorites stay readable by any client that speaks the API's format.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::entity::Entity;

/// Number of numbered ingredient/measure slots in an API record.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Recipe identifier as issued by the API (`idMeal`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One ingredient slot. Either side may be missing in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientLine {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientLine {
    /// Blank sides are stored as missing.
    pub fn new(ingredient: Option<&str>, measure: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.and_then(non_blank).map(str::to_string),
            measure: measure.and_then(non_blank).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredient.is_none() && self.measure.is_none()
    }

    /// "measure ingredient" for display, or `None` when there is no
    /// ingredient to show.
    pub fn label(&self) -> Option<String> {
        let ingredient = self.ingredient.as_deref()?;
        Some(match self.measure.as_deref() {
            Some(measure) => format!("{measure} {ingredient}"),
            None => ingredient.to_string(),
        })
    }
}

/// A recipe as fetched from the API. Never mutated after decoding.
///
/// Ingredients, tags and the video link only enter through the `with_*`
/// builders, which hold them to what the flat record can carry: at most
/// [`MAX_INGREDIENT_SLOTS`] non-empty lines, trimmed comma-free tags and a
/// non-blank link. A recipe with a blank id refuses to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMeal")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail: String,
    pub instructions: String,
    video: Option<String>,
    tags: Vec<String>,
    ingredients: Vec<IngredientLine>,
}

impl Recipe {
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            area: String::new(),
            thumbnail: String::new(),
            instructions: String::new(),
            video: None,
            tags: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Ignored when both sides are blank or every slot is taken.
    pub fn with_ingredient(mut self, ingredient: &str, measure: &str) -> Self {
        let line = IngredientLine::new(Some(ingredient), Some(measure));
        if !line.is_empty() && self.ingredients.len() < MAX_INGREDIENT_SLOTS {
            self.ingredients.push(line);
        }
        self
    }

    /// Comma-separated tags, as the API writes them. Blank entries are skipped.
    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags.extend(
            tags.split(',')
                .filter_map(non_blank)
                .map(str::to_string),
        );
        self
    }

    /// A blank link means no video.
    pub fn with_video(mut self, url: &str) -> Self {
        self.video = non_blank(url).map(str::to_string);
        self
    }

    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }

    /// Ingredient names only, in slot order.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .filter_map(|line| line.ingredient.as_deref())
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// The API's wire shape for a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    /// Numbered ingredient/measure slots plus any fields we don't model.
    #[serde(flatten)]
    slots: BTreeMap<String, Value>,
}

#[derive(Debug)]
pub(crate) struct MissingId;

impl fmt::Display for MissingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("recipe record has an empty idMeal")
    }
}

impl TryFrom<RawMeal> for Recipe {
    type Error = MissingId;

    fn try_from(raw: RawMeal) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(MissingId);
        }

        let mut recipe = Recipe::new(raw.id, raw.name.unwrap_or_default())
            .with_category(raw.category.unwrap_or_default())
            .with_area(raw.area.unwrap_or_default())
            .with_thumbnail(raw.thumbnail.unwrap_or_default())
            .with_instructions(raw.instructions.unwrap_or_default())
            .with_video(raw.video.as_deref().unwrap_or_default())
            .with_tags(raw.tags.as_deref().unwrap_or_default());

        for slot in 1..=MAX_INGREDIENT_SLOTS {
            recipe = recipe.with_ingredient(
                slot_text(&raw.slots, &format!("strIngredient{slot}")),
                slot_text(&raw.slots, &format!("strMeasure{slot}")),
            );
        }
        Ok(recipe)
    }
}

impl From<&Recipe> for RawMeal {
    fn from(recipe: &Recipe) -> Self {
        let mut slots = BTreeMap::new();
        for (index, line) in recipe.ingredients.iter().enumerate() {
            let slot = index + 1;
            slots.insert(format!("strIngredient{slot}"), text_value(&line.ingredient));
            slots.insert(format!("strMeasure{slot}"), text_value(&line.measure));
        }

        RawMeal {
            id: recipe.id.0.clone(),
            name: Some(recipe.name.clone()),
            category: Some(recipe.category.clone()),
            area: Some(recipe.area.clone()),
            thumbnail: Some(recipe.thumbnail.clone()),
            instructions: Some(recipe.instructions.clone()),
            video: recipe.video.clone(),
            tags: (!recipe.tags.is_empty()).then(|| recipe.tags.join(",")),
            slots,
        }
    }
}

impl Serialize for Recipe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.id.0.trim().is_empty() {
            return Err(serde::ser::Error::custom(MissingId));
        }
        RawMeal::from(self).serialize(serializer)
    }
}

fn slot_text<'a>(slots: &'a BTreeMap<String, Value>, key: &str) -> &'a str {
    match slots.get(key) {
        Some(Value::String(text)) => text,
        _ => "",
    }
}

fn text_value(text: &Option<String>) -> Value {
    text.clone().map(Value::String).unwrap_or(Value::Null)
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn api_record() -> Value {
        json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strTags": "Meat,Casserole",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
            "strIngredient1": "soy sauce",
            "strIngredient2": "water",
            "strIngredient3": "",
            "strIngredient4": null,
            "strIngredient5": "  ",
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": "",
            "strMeasure4": null,
            "strMeasure5": "pinch",
            "strSource": null,
            "dateModified": null
        })
    }

    #[test]
    fn test_decode_api_record() {
        let recipe: Recipe = serde_json::from_value(api_record()).unwrap();

        assert_eq!(recipe.id, RecipeId::from("52772"));
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.category, "Chicken");
        assert_eq!(recipe.area, "Japanese");
        assert_eq!(recipe.tags, vec!["Meat", "Casserole"]);
        assert_eq!(
            recipe.video.as_deref(),
            Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
        );
        assert_eq!(
            recipe.ingredients,
            vec![
                IngredientLine::new(Some("soy sauce"), Some("3/4 cup")),
                IngredientLine::new(Some("water"), Some("1/2 cup")),
                IngredientLine::new(None, Some("pinch")),
            ]
        );
    }

    #[test]
    fn test_ingredient_labels_skip_missing_ingredient() {
        let recipe: Recipe = serde_json::from_value(api_record()).unwrap();
        let labels: Vec<String> = recipe.ingredients.iter().filter_map(IngredientLine::label).collect();
        assert_eq!(labels, vec!["3/4 cup soy sauce", "1/2 cup water"]);
        assert_eq!(recipe.ingredient_names().collect::<Vec<_>>(), vec!["soy sauce", "water"]);
    }

    #[test]
    fn test_sparse_record_defaults() {
        let recipe: Recipe = serde_json::from_value(json!({"idMeal": "1"})).unwrap();
        assert_eq!(recipe, Recipe::new("1", ""));
    }

    #[test]
    fn test_blank_video_is_none() {
        let recipe: Recipe =
            serde_json::from_value(json!({"idMeal": "1", "strYoutube": ""})).unwrap();
        assert!(recipe.video.is_none());
    }

    #[test]
    fn test_reject_missing_or_empty_id() {
        assert!(serde_json::from_value::<Recipe>(json!({"strMeal": "No id"})).is_err());
        assert!(serde_json::from_value::<Recipe>(json!({"idMeal": "  "})).is_err());
        assert!(serde_json::from_value::<Recipe>(json!({"idMeal": 52772})).is_err());
    }

    #[test]
    fn test_persisted_form_reloads_identically() {
        let recipe: Recipe = serde_json::from_value(api_record()).unwrap();
        let stored = serde_json::to_string(&recipe).unwrap();
        let reloaded: Recipe = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, recipe);

        let flat: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(flat["idMeal"], "52772");
        assert_eq!(flat["strIngredient2"], "water");
        assert_eq!(flat["strTags"], "Meat,Casserole");
    }

    #[test]
    fn test_blank_ingredient_line_not_stored() {
        let recipe = Recipe::new("1", "Toast").with_ingredient("", "").with_ingredient("  ", "\t");
        assert!(recipe.ingredients().is_empty());

        let back: Recipe = serde_json::from_str(&serde_json::to_string(&recipe).unwrap()).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_ingredients_capped_at_slot_count() {
        let recipe = (0..MAX_INGREDIENT_SLOTS + 5)
            .fold(Recipe::new("1", "Stew"), |recipe, n| {
                recipe.with_ingredient(&format!("item {n}"), "")
            });
        assert_eq!(recipe.ingredients().len(), MAX_INGREDIENT_SLOTS);
        assert_eq!(recipe.ingredient_names().last(), Some("item 19"));
    }

    #[test]
    fn test_tags_and_video_normalized() {
        let recipe = Recipe::new("1", "Pie")
            .with_tags(" Sweet, ,Baked ")
            .with_tags("Pie")
            .with_video("   ");
        assert_eq!(recipe.tags(), ["Sweet", "Baked", "Pie"]);
        assert_eq!(recipe.video(), None);
        assert_eq!(
            Recipe::new("1", "Pie").with_video(" https://youtu.be/x ").video(),
            Some("https://youtu.be/x")
        );
    }

    #[test]
    fn test_blank_id_refuses_to_serialize() {
        assert!(serde_json::to_string(&Recipe::new(" ", "Nameless")).is_err());
        assert!(serde_json::to_string(&vec![Recipe::new("1", "a"), Recipe::new("", "b")]).is_err());
    }

    fn recipe_strategy() -> impl Strategy<Value = Recipe> {
        let text = ".{0,12}";
        (
            (".{1,8}", text, text, text, text, text, text),
            prop::collection::vec((text, text), 0..30),
            prop::collection::vec(text, 0..5),
        )
            .prop_map(|((id, name, category, area, thumbnail, instructions, video), lines, tags)| {
                let recipe = Recipe::new(id, name)
                    .with_category(category)
                    .with_area(area)
                    .with_thumbnail(thumbnail)
                    .with_instructions(instructions)
                    .with_video(&video);
                let recipe = tags.iter().fold(recipe, |recipe, tag| recipe.with_tags(tag));
                lines
                    .iter()
                    .fold(recipe, |recipe, (ingredient, measure)| recipe.with_ingredient(ingredient, measure))
            })
    }

    proptest! {
        #[test]
        fn prop_persisted_recipe_reloads_equal(recipe in recipe_strategy()) {
            match serde_json::to_string(&recipe) {
                Ok(stored) => {
                    let reloaded: Recipe = serde_json::from_str(&stored).unwrap();
                    prop_assert_eq!(reloaded, recipe);
                }
                Err(_) => prop_assert!(recipe.id.as_str().trim().is_empty()),
            }
        }

        #[test]
        fn prop_persisted_collection_reloads_equal(recipes in prop::collection::vec(recipe_strategy(), 0..6)) {
            if let Ok(stored) = serde_json::to_string(&recipes) {
                let reloaded: Vec<Recipe> = serde_json::from_str(&stored).unwrap();
                prop_assert_eq!(reloaded, recipes);
            }
        }
    }
}
