//! Rename Drafts
//!
//! Decides what committing an edited title does.

/// Result of committing a rename draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    /// Save this trimmed title
    Rename(String),
    /// Same title as before, nothing to save
    Unchanged,
    /// Blank draft, restore the current title
    Revert,
}

pub fn resolve_draft(draft: &str, current: &str) -> DraftOutcome {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        DraftOutcome::Revert
    } else if trimmed == current {
        DraftOutcome::Unchanged
    } else {
        DraftOutcome::Rename(trimmed.to_string())
    }
}

/// Label for the completion checkbox
pub fn toggle_label(title: &str, completed: bool) -> String {
    format!(
        "Mark \"{}\" as {}",
        title,
        if completed { "incomplete" } else { "complete" }
    )
}

pub fn delete_label(title: &str) -> String {
    format!("Delete \"{}\"", title)
}
