//! Recipe Box Core
//!
//! Layered architecture:
//! - domain: Recipe and Category entities, mapped from the API's flat records
//! - gateway: Recipe data access over the external HTTP API
//! - query: Keyed, deduplicating cache in front of the gateway
//! - favorites: Persisted, observable favorites collection
//! - browse: Debounced search, category filter and pagination
//!
//! Nothing here touches the DOM, so the whole crate runs under native tests.

pub mod browse;
pub mod config;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod gateway;
pub mod query;

pub use browse::{BrowseState, Debouncer, PageItem, PageView, Pagination, SourceSelection};
pub use config::CatalogConfig;
pub use domain::{Category, Entity, IngredientLine, Recipe, RecipeId};
pub use error::{ApiError, ConfigError, StorageError};
pub use favorites::{FavoritesStore, KeyValueStore, MemoryStore, SubscriptionId};
pub use gateway::{MealDbClient, RecipeSource};
pub use query::{QueryCache, QueryKey, QueryState, RecipeQueries, Revalidation};
