//! Task Models
//!
//! Records as they are stored under the tasks key, plus the filter selector
//! and derived counts.

use serde::{Deserialize, Serialize};

use crate::id::{generate_id, now_millis};

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, never changes
    pub id: String,
    /// Non-empty once trimmed
    pub title: String,
    pub completed: bool,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl Task {
    /// Create a new, not yet completed task stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            completed: false,
            created_at: now_millis(),
        }
    }

    /// Whether the title survives normalization
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// View restriction chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All selectors in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task belongs in the view for this selector
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Aggregate counts over the canonical collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}
