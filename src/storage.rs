//! Browser Storage
//!
//! `localStorage` adapter for the task store. Falls back to session-only
//! memory when the browser refuses access (disabled storage, sandboxed
//! frames).

use task_store::{MemoryStorage, Storage, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// `localStorage` if available, memory otherwise
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStorage::Local(storage),
            Err(e) => {
                log::warn!("[STORAGE] {}, tasks will not survive a reload", e);
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn local_storage() -> StoreResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(describe(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            BrowserStorage::Local(s) => s.get_item(key).map_err(|e| StoreError::Read(describe(e))),
            BrowserStorage::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            BrowserStorage::Local(s) => s.set_item(key, value).map_err(|e| StoreError::Write(describe(e))),
            BrowserStorage::Memory(s) => s.set_item(key, value),
        }
    }
}
