//! Application Context
//!
//! Owns the task store and exposes the user actions to components via the
//! Leptos Context API.

use leptos::prelude::*;
use task_store::{Filter, TaskStore};

use crate::storage::BrowserStorage;
use crate::store::{store_apply_snapshot, UiStore};

/// Task store plus the reactive view of it
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical state; not `Send`, so kept in local storage
    store: StoredValue<TaskStore<BrowserStorage>, LocalStorage>,
    /// Rendered snapshot
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(store: TaskStore<BrowserStorage>, ui: UiStore) -> Self {
        Self {
            store: StoredValue::new_local(store),
            ui,
        }
    }

    pub fn add_task(&self, title: &str) {
        self.apply(|store| {
            store.add_task(title);
        });
    }

    pub fn toggle_task(&self, id: &str) {
        self.apply(|store| store.toggle_task(id));
    }

    pub fn delete_task(&self, id: &str) {
        self.apply(|store| store.delete_task(id));
    }

    pub fn rename_task(&self, id: &str, title: &str) {
        self.apply(|store| store.rename_task(id, title));
    }

    pub fn clear_completed(&self) {
        self.apply(|store| store.clear_completed());
    }

    pub fn set_filter(&self, filter: Filter) {
        self.apply(|store| store.set_filter(filter));
    }

    /// Run one action against the store, then push the new snapshot to the UI
    fn apply(&self, action: impl FnOnce(&mut TaskStore<BrowserStorage>)) {
        let snapshot = self.store.try_update_value(|store| {
            action(store);
            store.snapshot().clone()
        });
        match snapshot {
            Some(snapshot) => store_apply_snapshot(&self.ui, snapshot),
            None => log::error!("[APP] Task store was disposed"),
        }
    }
}
