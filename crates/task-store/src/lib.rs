//! Task Store
//!
//! Layered core of the retro task manager:
//! - model / view / ops: task records, filtering and immutable CRUD
//! - normalize / id: turning untrusted stored JSON into valid records
//! - storage / cell: key/value persistence that never blocks the UI
//! - store: the state owner the UI calls into

mod config;
mod error;
mod id;
mod model;
mod normalize;
mod ops;
mod view;
mod storage;
mod cell;
mod store;

#[cfg(test)]
mod tests;

pub use config::{StoreConfig, DEFAULT_FILTER_KEY, DEFAULT_TASKS_KEY, TITLE_MAX_LEN};
pub use error::{StoreError, StoreResult};
pub use id::{generate_id, now_millis};
pub use model::{Counts, Filter, Task};
pub use normalize::normalize;
pub use ops::{add_task, add_task_with, clear_completed, delete_task, rename_task, toggle_task};
pub use view::{compute_counts, compute_view};
pub use storage::{MemoryStorage, Storage};
pub use cell::PersistentCell;
pub use store::{Snapshot, TaskStore};
