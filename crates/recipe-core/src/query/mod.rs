//! Query Layer
//!
//! `RecipeQueries` keeps one cache per query kind in front of a
//! `RecipeSource`. Keys carry the exact parameter, so a response for an old
//! search text can never be served for a new one.
//!
//! The gateway reports failures as empty lists and `None`, so those values are
//! never reused: the next consumer asks upstream again.

mod cache;

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

pub use cache::{QueryCache, QueryState};

use crate::domain::{Category, Recipe, RecipeId};
use crate::gateway::RecipeSource;

/// Operation name plus parameters of a cacheable request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllRecipes,
    Search(String),
    Recipe(RecipeId),
    Categories,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::AllRecipes => f.write_str("allRecipes"),
            QueryKey::Search(text) => write!(f, "search:{text}"),
            QueryKey::Recipe(id) => write!(f, "recipe:{id}"),
            QueryKey::Categories => f.write_str("categories"),
        }
    }
}

fn settle<V>(result: Result<V, Infallible>) -> V {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A cached value to show now and the refetch that replaces it.
pub type Revalidation<V> = (Option<V>, LocalBoxFuture<'static, V>);

pub struct RecipeQueries<S> {
    source: Rc<S>,
    catalog: QueryCache<QueryKey, Vec<Recipe>>,
    searches: QueryCache<QueryKey, Option<Vec<Recipe>>>,
    recipes: QueryCache<QueryKey, Option<Recipe>>,
    categories: QueryCache<QueryKey, Vec<Category>>,
}

impl<S> Clone for RecipeQueries<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            catalog: self.catalog.clone(),
            searches: self.searches.clone(),
            recipes: self.recipes.clone(),
            categories: self.categories.clone(),
        }
    }
}

impl<S: RecipeSource + 'static> RecipeQueries<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Rc::new(source),
            catalog: QueryCache::reusing(|recipes| !recipes.is_empty()),
            searches: QueryCache::reusing(Option::is_some),
            recipes: QueryCache::reusing(Option::is_some),
            categories: QueryCache::reusing(|categories| !categories.is_empty()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn all_recipes(&self) -> Vec<Recipe> {
        let source = Rc::clone(&self.source);
        settle(
            self.catalog
                .fetch(QueryKey::AllRecipes, move || async move {
                    Ok(source.list_all().await)
                })
                .await,
        )
    }

    /// Cached catalog for an arriving screen plus a refetch of it.
    pub fn revalidate_all_recipes(&self) -> Revalidation<Vec<Recipe>> {
        let source = Rc::clone(&self.source);
        let (stale, fresh) = self
            .catalog
            .revalidate(QueryKey::AllRecipes, move || async move {
                Ok(source.list_all().await)
            });
        (stale, fresh.map(settle).boxed_local())
    }

    pub async fn search(&self, text: &str) -> Option<Vec<Recipe>> {
        let source = Rc::clone(&self.source);
        let text = text.to_string();
        let key = QueryKey::Search(text.clone());
        settle(
            self.searches
                .fetch(key, move || async move { Ok(source.search(&text).await) })
                .await,
        )
    }

    pub fn revalidate_search(&self, text: &str) -> Revalidation<Option<Vec<Recipe>>> {
        let source = Rc::clone(&self.source);
        let text = text.to_string();
        let key = QueryKey::Search(text.clone());
        let (stale, fresh) = self
            .searches
            .revalidate(key, move || async move { Ok(source.search(&text).await) });
        (stale, fresh.map(settle).boxed_local())
    }

    pub async fn recipe(&self, id: &RecipeId) -> Option<Recipe> {
        let source = Rc::clone(&self.source);
        let id = id.clone();
        let key = QueryKey::Recipe(id.clone());
        settle(
            self.recipes
                .fetch(key, move || async move { Ok(source.get_by_id(&id).await) })
                .await,
        )
    }

    pub fn revalidate_recipe(&self, id: &RecipeId) -> Revalidation<Option<Recipe>> {
        let source = Rc::clone(&self.source);
        let id = id.clone();
        let key = QueryKey::Recipe(id.clone());
        let (stale, fresh) = self
            .recipes
            .revalidate(key, move || async move { Ok(source.get_by_id(&id).await) });
        (stale, fresh.map(settle).boxed_local())
    }

    pub async fn categories(&self) -> Vec<Category> {
        let source = Rc::clone(&self.source);
        settle(
            self.categories
                .fetch(QueryKey::Categories, move || async move {
                    Ok(source.list_categories().await)
                })
                .await,
        )
    }

    /// Whether a request for `key` is currently in flight.
    pub fn is_pending(&self, key: &QueryKey) -> bool {
        match key {
            QueryKey::AllRecipes => self.catalog.is_pending(key),
            QueryKey::Search(_) => self.searches.is_pending(key),
            QueryKey::Recipe(_) => self.recipes.is_pending(key),
            QueryKey::Categories => self.categories.is_pending(key),
        }
    }
}
