//! Derived View
//!
//! Filtered view and counts, recomputed from the canonical collection.

use crate::model::{Counts, Filter, Task};

/// Tasks visible under `filter`, in collection order
pub fn compute_view(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

pub fn compute_counts(tasks: &[Task]) -> Counts {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    Counts {
        total,
        active: total - completed,
        completed,
    }
}
