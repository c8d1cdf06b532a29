//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each field is
//! persisted under its own storage key whenever it changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::backup::{BackupDocument, RestorePayload};
use crate::config::StorageConfig;
use crate::models::{Item, ItineraryState, ShoppingAlbum, TodosState};
use crate::seed;
use crate::storage::{load_or_seed, save_json, KeyValueStore};

/// Persisted planner state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Pre-trip checklists
    pub todos: TodosState,
    /// Day lists keyed by date
    pub itinerary: ItineraryState,
    pub shopping_albums: Vec<ShoppingAlbum>,
}

impl AppState {
    /// Built-in seed data
    pub fn seeded() -> Self {
        Self {
            todos: seed::initial_todos(),
            itinerary: seed::initial_itinerary(),
            shopping_albums: seed::initial_shopping(),
        }
    }

    /// Read every key, seeding the ones that are missing or malformed
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S, keys: &StorageConfig) -> Self {
        Self {
            todos: load_or_seed(storage, &keys.todos_key, seed::initial_todos),
            itinerary: load_or_seed(storage, &keys.itinerary_key, seed::initial_itinerary),
            shopping_albums: load_or_seed(storage, &keys.shopping_key, seed::initial_shopping),
        }
    }

    /// Overwrite each field present in a restore file
    pub fn apply_restore(&mut self, payload: RestorePayload) {
        if let Some(todos) = payload.todos {
            self.todos = todos;
        }
        if let Some(itinerary) = payload.itinerary {
            self.itinerary = itinerary;
        }
        if let Some(albums) = payload.shopping_albums {
            self.shopping_albums = albums;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// One day's list (tracked)
pub fn store_day(store: &AppStore, date: &str) -> Vec<Item> {
    store.itinerary().with(|itinerary| itinerary.get(date).cloned().unwrap_or_default())
}

/// Replace one day's list
pub fn store_set_day(store: &AppStore, date: &str, items: Vec<Item>) {
    store.itinerary().write().insert(date.to_string(), items);
}

pub fn store_set_albums(store: &AppStore, albums: Vec<ShoppingAlbum>) {
    store.shopping_albums().set(albums);
}

/// Apply a restore payload; absent fields keep their current value
pub fn store_apply_restore(store: &AppStore, payload: RestorePayload) {
    store.update(|state| state.apply_restore(payload));
}

/// Snapshot for the backup download
pub fn store_backup(store: &AppStore, app: &str) -> BackupDocument {
    BackupDocument::new(
        app,
        chrono::Utc::now(),
        store.todos().get_untracked(),
        store.itinerary().get_untracked(),
        store.shopping_albums().get_untracked(),
    )
}

/// Write each field back to storage whenever it changes
pub fn persist_store<S>(store: AppStore, storage: S, keys: StorageConfig)
where
    S: KeyValueStore + Clone + 'static,
{
    let (todos_storage, todos_key) = (storage.clone(), keys.todos_key);
    Effect::new(move |_| {
        store.todos().with(|todos| {
            if let Err(e) = save_json(&todos_storage, &todos_key, todos) {
                log::error!("[STORE] Failed to save todos: {}", e);
            }
        });
    });

    let (itinerary_storage, itinerary_key) = (storage.clone(), keys.itinerary_key);
    Effect::new(move |_| {
        store.itinerary().with(|itinerary| {
            if let Err(e) = save_json(&itinerary_storage, &itinerary_key, itinerary) {
                log::error!("[STORE] Failed to save itinerary: {}", e);
            }
        });
    });

    let shopping_key = keys.shopping_key;
    Effect::new(move |_| {
        store.shopping_albums().with(|albums| {
            if let Err(e) = save_json(&storage, &shopping_key, albums) {
                log::error!("[STORE] Failed to save shopping albums: {}", e);
            }
        });
    });
}
