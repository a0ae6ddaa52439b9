//! Domain Layer - Core Entity Trait
//!
//! Every entity carries a unique identifier; collections of entities are
//! deduplicated by it.

use std::collections::HashSet;
use std::hash::Hash;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Drop every entity whose id already appeared earlier in `items`.
///
/// Keeps the first occurrence and the original order. Returns how many
/// entries were removed.
pub fn retain_unique<T: Entity>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(item.id()));
    before - items.len()
}
