//! Favorites Store Tests
//!
//! Runs the store over `MemoryStore`.

#[cfg(test)]
mod tests {
    use crate::domain::{Recipe, RecipeId};
    use crate::error::StorageError;
    use crate::favorites::{
        FavoritesStore, KeyValueStore, MemoryStore, FAVORITES_KEY, SELECTED_RECIPES_KEY,
    };
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn recipe(id: &str) -> Recipe {
        Recipe::new(id, format!("Recipe {id}"))
            .with_category("Dessert")
            .with_ingredient("Sugar", "1 cup")
    }

    fn ids(store: &FavoritesStore<impl KeyValueStore>) -> Vec<String> {
        store
            .recipes()
            .iter()
            .map(|r| r.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_open_empty_storage() {
        let store = FavoritesStore::open(MemoryStore::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_contains() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        assert_eq!(store.add(recipe("1")), Ok(true));
        assert!(store.contains(&RecipeId::from("1")));
        assert!(!store.contains(&RecipeId::from("2")));
    }

    #[test]
    fn test_add_twice_keeps_one() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(recipe("1")).unwrap();
        assert_eq!(store.add(recipe("1")), Ok(false));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_then_not_contains() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(recipe("1")).unwrap();
        store.add(recipe("2")).unwrap();
        assert_eq!(store.remove(&RecipeId::from("1")), Ok(true));
        assert!(!store.contains(&RecipeId::from("1")));
        assert_eq!(ids(&store), vec!["2"]);
        assert_eq!(store.remove(&RecipeId::from("1")), Ok(false));
    }

    #[test]
    fn test_toggle_reports_membership() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        let pie = recipe("1");
        assert_eq!(store.toggle(&pie), Ok(true));
        assert_eq!(store.toggle(&pie), Ok(false));
        assert!(store.is_empty());
    }

    #[test]
    fn test_persist_and_reload_preserves_order() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::open(Arc::clone(&storage));
        for id in ["3", "1", "2"] {
            store.add(recipe(id)).unwrap();
        }

        let reopened = FavoritesStore::open(Arc::clone(&storage));
        assert_eq!(reopened.recipes(), store.recipes());
        assert_eq!(ids(&reopened), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_writes_mirror_selected_recipes() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(recipe("1")).unwrap();

        let primary = store.storage().get(FAVORITES_KEY).unwrap();
        let mirror = store.storage().get(SELECTED_RECIPES_KEY).unwrap();
        assert!(primary.is_some());
        assert_eq!(primary, mirror);
    }

    #[test]
    fn test_load_falls_back_to_mirror_key() {
        let stored = serde_json::to_string(&vec![recipe("9")]).unwrap();
        let store = FavoritesStore::open(MemoryStore::with_entry(SELECTED_RECIPES_KEY, &stored));
        assert_eq!(ids(&store), vec!["9"]);
    }

    #[test]
    fn test_malformed_storage_is_empty() {
        for raw in ["not json", "{\"idMeal\": \"1\"}", "[{\"strMeal\": \"no id\"}]"] {
            let store = FavoritesStore::open(MemoryStore::with_entry(FAVORITES_KEY, raw));
            assert!(store.is_empty(), "{raw} should load as empty");
        }
    }

    #[test]
    fn test_raw_api_records_load() {
        let raw = r#"[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole","strCategory":"Chicken","strIngredient1":"soy sauce","strMeasure1":"3/4 cup","strIngredient2":""}]"#;
        let store = FavoritesStore::open(MemoryStore::with_entry(FAVORITES_KEY, raw));
        assert_eq!(store.len(), 1);
        assert_eq!(store.recipes()[0].ingredients().len(), 1);
    }

    #[test]
    fn test_duplicates_normalized_on_load() {
        let mut first = recipe("1");
        first.name = "First".to_string();
        let mut again = recipe("1");
        again.name = "Again".to_string();
        let stored = serde_json::to_string(&vec![first, recipe("2"), again]).unwrap();

        let store = FavoritesStore::open(MemoryStore::with_entry(FAVORITES_KEY, &stored));
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.recipes()[0].name, "First");
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::open(Arc::clone(&storage));
        store.add(recipe("1")).unwrap();

        storage.fail_writes(true);
        assert!(matches!(store.add(recipe("2")), Err(StorageError::Write { .. })));
        assert!(store.remove(&RecipeId::from("1")).is_err());
        assert_eq!(ids(&store), vec!["1"]);

        storage.fail_writes(false);
        assert_eq!(ids(&FavoritesStore::open(Arc::clone(&storage))), vec!["1"]);
    }

    #[test]
    fn test_recipe_without_id_is_not_saved() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::open(Arc::clone(&storage));
        store.add(recipe("1")).unwrap();

        assert!(matches!(store.add(recipe(" ")), Err(StorageError::Encode { .. })));
        assert_eq!(ids(&store), vec!["1"]);
        assert_eq!(ids(&FavoritesStore::open(Arc::clone(&storage))), vec!["1"]);
    }

    #[test]
    fn test_listeners_notified() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |recipes| sink.borrow_mut().push(recipes.len()));

        store.add(recipe("1")).unwrap();
        store.add(recipe("1")).unwrap();
        store.add(recipe("2")).unwrap();
        store.remove(&RecipeId::from("1")).unwrap();
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add(recipe("3")).unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_failed_write_does_not_notify() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::open(Arc::clone(&storage));
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        storage.fail_writes(true);
        let _ = store.add(recipe("1"));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::open(Arc::clone(&storage));
        let mut other_tab = FavoritesStore::open(Arc::clone(&storage));
        other_tab.add(recipe("5")).unwrap();

        assert!(store.is_empty());
        store.reload();
        assert_eq!(ids(&store), vec!["5"]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..8).prop_map(Op::Add),
            (0u8..8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_add_remove_sequences(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let storage = Arc::new(MemoryStore::new());
            let mut store = FavoritesStore::open(Arc::clone(&storage));
            let mut expected: Vec<String> = Vec::new();

            for op in &ops {
                match op {
                    Op::Add(n) => {
                        let id = n.to_string();
                        store.add(recipe(&id)).unwrap();
                        if !expected.contains(&id) {
                            expected.push(id);
                        }
                    }
                    Op::Remove(n) => {
                        let id = n.to_string();
                        store.remove(&RecipeId::from(id.as_str())).unwrap();
                        expected.retain(|e| e != &id);
                    }
                }
            }

            prop_assert_eq!(ids(&store), expected);
            let reopened = FavoritesStore::open(Arc::clone(&storage));
            prop_assert_eq!(reopened.recipes(), store.recipes());
        }
    }
}
