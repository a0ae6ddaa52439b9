//! TheMealDB client.
//!
//! Four GET endpoints under the configured base URL:
//! `search.php?f=<letter>`, `search.php?s=<text>`, `lookup.php?i=<id>` and
//! `categories.php`.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::envelope::{CategoriesEnvelope, MealsEnvelope};
use super::traits::RecipeSource;
use crate::config::CatalogConfig;
use crate::domain::{retain_unique, Category, Recipe, RecipeId};
use crate::error::{ApiError, ConfigError};

/// Letters queried, in order, to assemble the full catalog.
pub const CATALOG_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MealDbClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_base_url(config.base_url()?))
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, param: Option<(&str, &str)>) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}{path}: {e}", self.base_url)))?;
        if let Some((name, value)) = param {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let url_text = url.to_string();
        tracing::debug!(url = %url_text, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url_text, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_text,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(&url_text, &e))?;
        serde_json::from_str(&body).map_err(|e| ApiError::decode(&url_text, &e))
    }

    /// Recipes whose name starts with `letter`. Empty when none.
    pub async fn try_letter(&self, letter: char) -> Result<Vec<Recipe>, ApiError> {
        let letter = letter.to_string();
        let url = self.endpoint("search.php", Some(("f", letter.as_str())))?;
        let envelope: MealsEnvelope = self.get_json(url).await?;
        Ok(envelope.into_recipes().unwrap_or_default())
    }

    /// Every letter in order, concatenated. The first failure aborts the
    /// whole aggregation.
    pub async fn try_list_all(&self) -> Result<Vec<Recipe>, ApiError> {
        let mut recipes = Vec::new();
        for letter in CATALOG_LETTERS.chars() {
            recipes.extend(self.try_letter(letter).await?);
        }
        Ok(recipes)
    }

    pub async fn try_search(&self, text: &str) -> Result<Option<Vec<Recipe>>, ApiError> {
        let url = self.endpoint("search.php", Some(("s", text)))?;
        let envelope: MealsEnvelope = self.get_json(url).await?;
        Ok(envelope.into_recipes())
    }

    pub async fn try_get_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, ApiError> {
        let url = self.endpoint("lookup.php", Some(("i", id.as_str())))?;
        let envelope: MealsEnvelope = self.get_json(url).await?;
        Ok(envelope
            .into_recipes()
            .and_then(|recipes| recipes.into_iter().next()))
    }

    /// Categories in API order, one per name.
    pub async fn try_list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint("categories.php", None)?;
        let envelope: CategoriesEnvelope = self.get_json(url).await?;
        let mut categories = envelope.into_categories();
        let dropped = retain_unique(&mut categories);
        if dropped > 0 {
            tracing::debug!(dropped, "duplicate category names dropped");
        }
        Ok(categories)
    }
}

#[async_trait(?Send)]
impl RecipeSource for MealDbClient {
    async fn list_all(&self) -> Vec<Recipe> {
        match self.try_list_all().await {
            Ok(recipes) => {
                tracing::info!(count = recipes.len(), "catalog loaded");
                recipes
            }
            Err(e) => {
                tracing::warn!(error = %e, "error fetching all recipes");
                Vec::new()
            }
        }
    }

    async fn search(&self, text: &str) -> Option<Vec<Recipe>> {
        match self.try_search(text).await {
            Ok(None) => {
                tracing::debug!(query = text, "search matched nothing");
                None
            }
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, query = text, "error searching recipes");
                None
            }
        }
    }

    async fn get_by_id(&self, id: &RecipeId) -> Option<Recipe> {
        match self.try_get_by_id(id).await {
            Ok(None) => {
                tracing::debug!(%id, "recipe not found");
                None
            }
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, %id, "error fetching recipe");
                None
            }
        }
    }

    async fn list_categories(&self) -> Vec<Category> {
        self.try_list_categories().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "error fetching categories");
            Vec::new()
        })
    }
}
