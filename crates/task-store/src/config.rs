//! Store Configuration
//!
//! Storage keys and input limits shared by the core and the UI.

/// Storage key holding the JSON array of tasks
pub const DEFAULT_TASKS_KEY: &str = "retro_tasks_v1";

/// Storage key holding the JSON-encoded filter selector
pub const DEFAULT_FILTER_KEY: &str = "retro_filter_v1";

/// Maximum title length accepted by the input widgets
pub const TITLE_MAX_LEN: usize = 120;

/// Where the store keeps its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub tasks_key: String,
    pub filter_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            filter_key: DEFAULT_FILTER_KEY.to_string(),
        }
    }
}
