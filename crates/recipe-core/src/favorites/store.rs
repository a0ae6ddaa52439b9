//! Favorites Store
//!
//! Ordered favorites, unique by recipe id, persisted wholesale on every
//! mutation and observable through listeners. One instance is shared by
//! every screen.

use std::fmt;

use super::storage::{KeyValueStore, FAVORITES_KEY, SELECTED_RECIPES_KEY};
use crate::domain::{retain_unique, Recipe, RecipeId};
use crate::error::StorageError;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[Recipe])>;

pub struct FavoritesStore<S> {
    storage: S,
    recipes: Vec<Recipe>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S> fmt::Debug for FavoritesStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("recipes", &self.recipes.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Open the store over `storage`, loading whatever is persisted there.
    pub fn open(storage: S) -> Self {
        let recipes = load(&storage);
        tracing::debug!(count = recipes.len(), "favorites loaded");
        Self {
            storage,
            recipes,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|recipe| &recipe.id == id)
    }

    /// Append `recipe` unless its id is already present.
    ///
    /// Returns whether the collection changed.
    pub fn add(&mut self, recipe: Recipe) -> Result<bool, StorageError> {
        if self.contains(&recipe.id) {
            return Ok(false);
        }
        let mut next = self.recipes.clone();
        next.push(recipe);
        self.commit(next)?;
        Ok(true)
    }

    /// Remove every entry with `id`. Returns whether the collection changed.
    pub fn remove(&mut self, id: &RecipeId) -> Result<bool, StorageError> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next = self
            .recipes
            .iter()
            .filter(|recipe| &recipe.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Remove when present, add otherwise. Returns the new membership.
    pub fn toggle(&mut self, recipe: &Recipe) -> Result<bool, StorageError> {
        if self.contains(&recipe.id) {
            self.remove(&recipe.id)?;
            Ok(false)
        } else {
            self.add(recipe.clone())?;
            Ok(true)
        }
    }

    /// Re-read persisted storage, replacing the in-memory collection.
    pub fn reload(&mut self) {
        self.recipes = load(&self.storage);
        self.notify();
    }

    /// Register `listener`; it receives the full collection after every
    /// successful mutation or reload.
    pub fn subscribe(&mut self, listener: impl Fn(&[Recipe]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Persist `next`, then adopt it. On failure the in-memory collection
    /// is left untouched.
    fn commit(&mut self, next: Vec<Recipe>) -> Result<(), StorageError> {
        if let Err(e) = persist(&self.storage, &self.recipes, &next) {
            tracing::warn!(error = %e, "failed to persist favorites");
            return Err(e);
        }
        self.recipes = next;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.recipes);
        }
    }
}

fn load<S: KeyValueStore>(storage: &S) -> Vec<Recipe> {
    let raw = match read_first(storage, &[FAVORITES_KEY, SELECTED_RECIPES_KEY]) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "favorites storage unreadable; starting empty");
            return Vec::new();
        }
    };

    let mut recipes: Vec<Recipe> = match serde_json::from_str(&raw) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!(error = %e, "malformed favorites in storage; starting empty");
            return Vec::new();
        }
    };

    let dropped = retain_unique(&mut recipes);
    if dropped > 0 {
        tracing::warn!(dropped, "duplicate favorites dropped on load");
    }
    recipes
}

fn read_first<S: KeyValueStore>(storage: &S, keys: &[&str]) -> Result<Option<String>, StorageError> {
    for key in keys {
        if let Some(raw) = storage.get(key)? {
            return Ok(Some(raw));
        }
    }
    Ok(None)
}

fn encode(recipes: &[Recipe]) -> Result<String, StorageError> {
    serde_json::to_string(recipes).map_err(|e| StorageError::Encode {
        key: FAVORITES_KEY.to_string(),
        message: e.to_string(),
    })
}

fn persist<S: KeyValueStore>(
    storage: &S,
    previous: &[Recipe],
    next: &[Recipe],
) -> Result<(), StorageError> {
    let encoded = encode(next)?;
    storage.set(FAVORITES_KEY, &encoded)?;

    if let Err(e) = storage.set(SELECTED_RECIPES_KEY, &encoded) {
        // Put the primary key back so both keys still agree.
        let restored = encode(previous).and_then(|old| storage.set(FAVORITES_KEY, &old));
        if let Err(restore_error) = restored {
            tracing::error!(error = %restore_error, "could not restore favorites after failed write");
        }
        return Err(e);
    }
    Ok(())
}
