//! Task Store
//!
//! The single owner of application state: the persisted task collection,
//! the persisted filter, and the snapshot derived from both. The UI calls
//! the boundary methods below and renders `snapshot()` afterwards.

use crate::cell::PersistentCell;
use crate::config::StoreConfig;
use crate::model::{Counts, Filter, Task};
use crate::normalize::normalize;
use crate::storage::Storage;
use crate::{ops, view};

/// Everything the UI renders, recomputed after every change
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Tasks passing the current filter, in collection order
    pub visible: Vec<Task>,
    pub counts: Counts,
    pub filter: Filter,
    /// False while the latest state only lives in memory
    pub durable: bool,
}

pub struct TaskStore<S> {
    tasks: PersistentCell<Vec<Task>, S>,
    filter: PersistentCell<Filter, S>,
    snapshot: Snapshot,
}

impl<S: Storage + Clone> TaskStore<S> {
    /// Load state from storage, normalizing whatever is found there
    pub fn load(storage: S, config: &StoreConfig) -> Self {
        let tasks = PersistentCell::initialize_with(
            storage.clone(),
            config.tasks_key.as_str(),
            Vec::new(),
            normalize,
        );
        let filter = PersistentCell::initialize(storage, config.filter_key.as_str(), Filter::All);
        log::debug!(
            "[STORE] Loaded {} tasks, filter={}",
            tasks.get().len(),
            filter.get().as_str()
        );

        let mut store = Self {
            tasks,
            filter,
            snapshot: Snapshot::default(),
        };
        store.recompute();
        store
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.get()
    }

    pub fn filter(&self) -> Filter {
        *self.filter.get()
    }

    pub fn counts(&self) -> Counts {
        self.snapshot.counts
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Whether both keys hold the current state
    pub fn is_durable(&self) -> bool {
        self.tasks.is_durable() && self.filter.is_durable()
    }

    /// Add a task titled `title` (trimmed). Returns the new id, `None` for a blank title.
    pub fn add_task(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title);
        let id = task.id.clone();
        let next = ops::add_task_with(self.tasks(), task);
        self.commit(next);
        Some(id)
    }

    pub fn toggle_task(&mut self, id: &str) {
        let next = ops::toggle_task(self.tasks(), id);
        self.commit(next);
    }

    pub fn delete_task(&mut self, id: &str) {
        let next = ops::delete_task(self.tasks(), id);
        self.commit(next);
    }

    /// Rename a task; blank titles are ignored
    pub fn rename_task(&mut self, id: &str, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        let next = ops::rename_task(self.tasks(), id, title);
        self.commit(next);
    }

    pub fn clear_completed(&mut self) {
        let next = ops::clear_completed(self.tasks());
        self.commit(next);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if let Err(e) = self.filter.write(filter) {
            log::warn!("[STORE] Filter kept in memory only: {}", e);
        }
        self.recompute();
    }

    /// Rebuild the snapshot from the current collection and filter
    pub fn recompute(&mut self) {
        let filter = self.filter();
        self.snapshot = Snapshot {
            visible: view::compute_view(self.tasks(), filter),
            counts: view::compute_counts(self.tasks()),
            filter,
            durable: self.is_durable(),
        };
    }

    fn commit(&mut self, next: Vec<Task>) {
        if let Err(e) = self.tasks.write(next) {
            log::warn!("[STORE] Tasks kept in memory only: {}", e);
        }
        log::debug!("[STORE] {} tasks", self.tasks().len());
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn fresh() -> (MemoryStorage, TaskStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = TaskStore::load(storage.clone(), &StoreConfig::default());
        (storage, store)
    }

    #[test]
    fn test_empty_start() {
        let (storage, store) = fresh();
        assert!(store.tasks().is_empty());
        assert_eq!(store.filter(), Filter::All);
        assert_eq!(store.counts(), Counts::default());
        assert!(store.snapshot().durable);
        assert_eq!(storage.get_item("retro_tasks_v1").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get_item("retro_filter_v1").unwrap().as_deref(), Some("\"all\""));
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let (_, mut store) = fresh();
        assert!(store.add_task("   ").is_none());
        assert!(store.tasks().is_empty());

        let id = store.add_task("  Defeat the bug ").unwrap();
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.tasks()[0].title, "Defeat the bug");
        assert_eq!(store.snapshot().visible.len(), 1);
    }

    #[test]
    fn test_rename_rejects_blank() {
        let (_, mut store) = fresh();
        let id = store.add_task("Original title").unwrap();
        store.rename_task(&id, "  ");
        assert_eq!(store.tasks()[0].title, "Original title");
        store.rename_task(&id, "Renamed title");
        assert_eq!(store.tasks()[0].title, "Renamed title");
    }

    #[test]
    fn test_snapshot_follows_filter() {
        let (_, mut store) = fresh();
        let a = store.add_task("Quest A").unwrap();
        store.add_task("Quest B");
        store.toggle_task(&a);

        store.set_filter(Filter::Active);
        let titles: Vec<&str> = store.snapshot().visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Quest B"]);

        store.set_filter(Filter::Completed);
        let titles: Vec<&str> = store.snapshot().visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Quest A"]);

        store.set_filter(Filter::All);
        assert_eq!(store.snapshot().visible.len(), 2);
        assert_eq!(store.snapshot().counts, Counts { total: 2, active: 1, completed: 1 });
    }

    #[test]
    fn test_unknown_id_leaves_state_and_storage_alone() {
        let (storage, mut store) = fresh();
        store.add_task("Quest A");
        let before = store.tasks().to_vec();
        let stored_before = storage.get_item("retro_tasks_v1").unwrap();

        store.rename_task("missing", "Renamed");
        store.toggle_task("missing");
        store.delete_task("missing");

        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(storage.get_item("retro_tasks_v1").unwrap(), stored_before);
        assert_eq!(store.counts(), Counts { total: 1, active: 1, completed: 0 });
    }

    #[test]
    fn test_duplicate_stored_ids_all_match() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                "retro_tasks_v1",
                r#"[{"id":"d","title":"A"},{"id":"d","title":"B"},{"id":"e","title":"C"}]"#,
            )
            .unwrap();
        let mut store = TaskStore::load(storage, &StoreConfig::default());
        assert_eq!(store.tasks().len(), 3);

        store.toggle_task("d");
        assert_eq!(store.counts(), Counts { total: 3, active: 1, completed: 2 });

        store.delete_task("d");
        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["e"]);
    }

    #[test]
    fn test_write_failure_degrades_to_memory() {
        let (storage, mut store) = fresh();
        storage.fail_writes(true);

        store.add_task("Unsaved quest");
        assert_eq!(store.tasks().len(), 1);
        assert!(!store.snapshot().durable);
        assert_eq!(storage.get_item("retro_tasks_v1").unwrap().as_deref(), Some("[]"));

        storage.fail_writes(false);
        store.add_task("Saved quest");
        assert!(store.snapshot().durable);
        let stored: Vec<Task> =
            serde_json::from_str(&storage.get_item("retro_tasks_v1").unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
    }
}
