//! Store Scenario Tests
//!
//! End-to-end behaviour of normalization, CRUD, filtering and persistence
//! against in-memory storage.

#[cfg(test)]
mod tests {
    use crate::{
        add_task, clear_completed, compute_counts, compute_view, delete_task, normalize,
        toggle_task, Counts, Filter, MemoryStorage, PersistentCell, Storage, StoreConfig, Task,
        TaskStore,
    };
    use serde_json::{json, Value};
    use std::collections::HashSet;

    fn make_task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed,
            created_at: 1_700_000_000_000,
        }
    }

    fn messy_input() -> Value {
        json!([
            {"id": "t1", "title": "Seeded active", "completed": false, "createdAt": 1_700_000_000_000i64},
            {"id": "t2", "title": "Seeded done", "completed": 1, "createdAt": 1_700_000_000_001i64},
            {"title": "No id", "completed": "yes"},
            {"id": "t4", "title": "   "},
            {"id": 5, "title": "Numeric id", "createdAt": "soon"},
            "stray string",
            null,
            [1, 2, 3],
        ])
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(messy_input());
        let twice = normalize(serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);

        for raw in [json!(null), json!({}), json!("x"), json!([]), json!([{}])] {
            let once = normalize(raw);
            assert_eq!(normalize(serde_json::to_value(&once).unwrap()), once);
        }
    }

    #[test]
    fn test_normalized_titles_are_never_blank() {
        let tasks = normalize(messy_input());
        assert_eq!(tasks.len(), 4);
        assert!(tasks.iter().all(|t| !t.title.trim().is_empty()));
    }

    #[test]
    fn test_normalized_ids_unique_for_distinct_input() {
        let raw = json!([
            {"id": "a", "title": "A"},
            {"title": "generated 1"},
            {"title": "generated 2"},
            {"id": false, "title": "generated 3"},
        ]);
        let tasks = normalize(raw);
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_counts_are_consistent() {
        let tasks = normalize(messy_input());
        let counts = compute_counts(&tasks);
        assert_eq!(counts.active + counts.completed, counts.total);
        assert_eq!(counts, Counts { total: 4, active: 2, completed: 2 });
    }

    #[test]
    fn test_filters_partition_the_collection() {
        let tasks = normalize(messy_input());
        let active = compute_view(&tasks, Filter::Active);
        let done = compute_view(&tasks, Filter::Completed);

        let active_ids: HashSet<&str> = active.iter().map(|t| t.id.as_str()).collect();
        let done_ids: HashSet<&str> = done.iter().map(|t| t.id.as_str()).collect();
        assert!(active_ids.is_disjoint(&done_ids));

        let union: Vec<Task> = tasks
            .iter()
            .filter(|t| active_ids.contains(t.id.as_str()) || done_ids.contains(t.id.as_str()))
            .cloned()
            .collect();
        assert_eq!(union, compute_view(&tasks, Filter::All));
    }

    #[test]
    fn test_add_prepends_newest() {
        let a = make_task("a", "A", false);
        let b = make_task("b", "B", false);
        let next = add_task(&[b.clone(), a.clone()], "C");
        assert_eq!(next[0].title, "C");
        assert_eq!(&next[1..], &[b, a]);
    }

    #[test]
    fn test_toggle_scenario() {
        let tasks = vec![make_task("t1", "X", false)];
        assert_eq!(compute_counts(&tasks), Counts { total: 1, active: 1, completed: 0 });

        let next = toggle_task(&tasks, "t1");
        assert_eq!(next, vec![make_task("t1", "X", true)]);
        assert_eq!(compute_counts(&next), Counts { total: 1, active: 0, completed: 1 });
    }

    #[test]
    fn test_delete_scenario() {
        let tasks = vec![make_task("t1", "X", false), make_task("t2", "Y", false)];
        let next = delete_task(&tasks, "t1");
        assert_eq!(next, vec![make_task("t2", "Y", false)]);
    }

    #[test]
    fn test_clear_completed_scenario() {
        let tasks = vec![make_task("t1", "X", true), make_task("t2", "Y", false)];
        assert_eq!(clear_completed(&tasks), vec![make_task("t2", "Y", false)]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let storage = MemoryStorage::new();
        let value = vec![make_task("t1", "X", true), make_task("t2", "Y", false)];

        let mut cell = PersistentCell::initialize(storage.clone(), "retro_tasks_v1", Vec::<Task>::new());
        cell.write(value.clone()).unwrap();

        let reloaded = PersistentCell::initialize(storage, "retro_tasks_v1", Vec::<Task>::new());
        assert_eq!(reloaded.get(), &value);
    }

    #[test]
    fn test_corrupt_storage_uses_default() {
        let storage = MemoryStorage::new();
        storage.set_item("retro_tasks_v1", "not json").unwrap();
        storage.set_item("retro_filter_v1", "not json").unwrap();

        let store = TaskStore::load(storage.clone(), &StoreConfig::default());
        assert!(store.tasks().is_empty());
        assert_eq!(store.filter(), Filter::All);
        assert_eq!(storage.get_item("retro_tasks_v1").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_unknown_filter_value_uses_default() {
        let storage = MemoryStorage::new();
        storage.set_item("retro_filter_v1", "\"done\"").unwrap();
        let store = TaskStore::load(storage, &StoreConfig::default());
        assert_eq!(store.filter(), Filter::All);
    }

    #[test]
    fn test_hydrates_tasks_and_filter() {
        let storage = MemoryStorage::new();
        let seeded = vec![
            make_task("t1", "Seeded active", false),
            make_task("t2", "Seeded done", true),
        ];
        storage
            .set_item("retro_tasks_v1", &serde_json::to_string(&seeded).unwrap())
            .unwrap();
        storage.set_item("retro_filter_v1", "\"completed\"").unwrap();

        let mut store = TaskStore::load(storage, &StoreConfig::default());
        assert_eq!(store.filter(), Filter::Completed);
        assert_eq!(store.snapshot().visible, vec![seeded[1].clone()]);

        store.set_filter(Filter::All);
        assert_eq!(store.snapshot().visible, seeded);
    }

    #[test]
    fn test_load_cleans_invalid_entries_out_of_storage() {
        let storage = MemoryStorage::new();
        storage
            .set_item("retro_tasks_v1", &messy_input().to_string())
            .unwrap();

        let store = TaskStore::load(storage.clone(), &StoreConfig::default());
        let stored: Value =
            serde_json::from_str(&storage.get_item("retro_tasks_v1").unwrap().unwrap()).unwrap();
        assert_eq!(stored, serde_json::to_value(store.tasks()).unwrap());
        assert_eq!(stored.as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_full_session_persists_every_change() {
        let storage = MemoryStorage::new();
        let config = StoreConfig::default();
        let mut store = TaskStore::load(storage.clone(), &config);

        let id = store.add_task("Defeat the bug").unwrap();
        let stored: Vec<Task> =
            serde_json::from_str(&storage.get_item(&config.tasks_key).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Defeat the bug");
        assert!(!stored[0].completed);

        store.rename_task(&id, "Renamed title");
        store.toggle_task(&id);
        store.set_filter(Filter::Active);
        assert_eq!(
            storage.get_item(&config.filter_key).unwrap().as_deref(),
            Some("\"active\"")
        );

        // a fresh load sees the same state
        let reloaded = TaskStore::load(storage.clone(), &config);
        assert_eq!(reloaded.tasks(), store.tasks());
        assert_eq!(reloaded.filter(), Filter::Active);
        assert!(reloaded.snapshot().visible.is_empty());

        store.clear_completed();
        store.delete_task(&id);
        assert_eq!(storage.get_item(&config.tasks_key).unwrap().as_deref(), Some("[]"));
    }
}
