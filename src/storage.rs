//! Key-Value Persistence
//!
//! State is stored as JSON strings under fixed keys. `LocalStorage` is the
//! browser backend; `MemoryStore` backs tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> PlannerResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PlannerResult<()>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> PlannerResult<Self> {
        let window = web_sys::window().ok_or_else(|| PlannerError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(PlannerError::browser)?
            .ok_or_else(|| PlannerError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> PlannerResult<Option<String>> {
        self.storage.get_item(key).map_err(PlannerError::browser)
    }

    fn set(&self, key: &str, value: &str) -> PlannerResult<()> {
        self.storage.set_item(key, value).map_err(PlannerError::browser)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PlannerResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PlannerResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and parse `key`. Missing, unreadable or malformed values fall back
/// to `seed`; the malformed case is logged.
pub fn load_or_seed<T, S, F>(store: &S, key: &str, seed: F) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return seed(),
        Err(e) => {
            log::warn!("[STORAGE] Failed to read {}: {}", key, e);
            return seed();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[STORAGE] Ignoring malformed {}: {}", key, e);
            seed()
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> PlannerResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItineraryState, TodosState};
    use crate::seed;

    #[test]
    fn test_missing_key_uses_seed() {
        let store = MemoryStore::default();
        let todos: TodosState = load_or_seed(&store, "lavender_todos", seed::initial_todos);
        assert_eq!(todos, seed::initial_todos());
    }

    #[test]
    fn test_malformed_value_uses_seed() {
        let store = MemoryStore::default();
        store.set("lavender_itinerary", "{not json").unwrap();
        let itinerary: ItineraryState = load_or_seed(&store, "lavender_itinerary", seed::initial_itinerary);
        assert_eq!(itinerary, seed::initial_itinerary());
    }

    #[test]
    fn test_wrong_shape_uses_seed() {
        let store = MemoryStore::default();
        store.set("lavender_todos", "[1, 2, 3]").unwrap();
        let todos: TodosState = load_or_seed(&store, "lavender_todos", seed::initial_todos);
        assert_eq!(todos, seed::initial_todos());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        let mut itinerary = seed::initial_itinerary();
        itinerary.remove("2024-12-13");
        save_json(&store, "lavender_itinerary", &itinerary).unwrap();

        let loaded: ItineraryState = load_or_seed(&store, "lavender_itinerary", ItineraryState::new);
        assert_eq!(loaded, itinerary);
    }

    #[test]
    fn test_stored_json_uses_wire_names() {
        let store = MemoryStore::default();
        save_json(&store, "lavender_todos", &seed::initial_todos()).unwrap();
        let raw = store.get("lavender_todos").unwrap().unwrap();
        assert!(raw.contains("\"carryOn\""));
    }
}
