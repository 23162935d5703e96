//! UI State Store
//!
//! Uses Leptos reactive_stores so each part of the page only re-renders
//! when its own field of the task snapshot changes.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{Counts, Filter, Snapshot, Task};

/// What the page renders, mirrored from the task store after every change
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Tasks passing the current filter
    pub visible: Vec<Task>,
    pub counts: Counts,
    pub filter: Filter,
    /// False when the last change could not be saved
    pub durable: bool,
}

impl From<Snapshot> for UiState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            visible: snapshot.visible,
            counts: snapshot.counts,
            filter: snapshot.filter,
            durable: snapshot.durable,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Copy a fresh snapshot into the store, field by field
pub fn store_apply_snapshot(store: &UiStore, snapshot: Snapshot) {
    if store.counts().get_untracked() != snapshot.counts {
        store.counts().set(snapshot.counts);
    }
    if store.filter().get_untracked() != snapshot.filter {
        store.filter().set(snapshot.filter);
    }
    if store.durable().get_untracked() != snapshot.durable {
        store.durable().set(snapshot.durable);
    }
    *store.visible().write() = snapshot.visible;
}
