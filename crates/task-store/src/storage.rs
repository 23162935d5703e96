//! Storage Layer
//!
//! String-keyed, string-valued storage in the shape of the browser's
//! `localStorage`. Implementations can use the browser, memory, etc.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StoreError, StoreResult};

/// Key/value storage backend
///
/// All operations are synchronous; a write either completes or fails.
pub trait Storage {
    /// Raw value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory storage shared between clones
///
/// Used in tests and as the session-only fallback when durable storage is
/// not available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Write(format!("quota exceeded writing '{}'", key)));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
