//! Persistent State Cell
//!
//! Binds one in-memory value to one storage key. Loading never fails: a
//! missing key, unreadable storage or corrupt JSON all fall back to the
//! initial value. Every write goes straight through to storage.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;

pub struct PersistentCell<T, S> {
    storage: S,
    key: String,
    value: T,
    durable: bool,
}

impl<T, S> PersistentCell<T, S>
where
    T: Serialize,
    S: Storage,
{
    /// Load `key` and decode it as `T`, falling back to `initial`
    pub fn initialize(storage: S, key: impl Into<String>, initial: T) -> Self
    where
        T: DeserializeOwned,
    {
        let key = key.into();
        let value = match read_raw(&storage, &key) {
            Some(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("[STORE] Ignoring unreadable value under '{}': {}", key, e);
                    initial
                }
            },
            None => initial,
        };
        Self::settle(storage, key, value)
    }

    /// Load `key` as untyped JSON and convert it with `decode`
    ///
    /// `decode` only runs when the key holds valid JSON; otherwise the cell
    /// starts from `initial`.
    pub fn initialize_with<F>(storage: S, key: impl Into<String>, initial: T, decode: F) -> Self
    where
        F: FnOnce(Value) -> T,
    {
        let key = key.into();
        let value = match read_raw(&storage, &key) {
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(json) => decode(json),
                Err(e) => {
                    log::warn!("[STORE] Ignoring corrupt JSON under '{}': {}", key, e);
                    initial
                }
            },
            None => initial,
        };
        Self::settle(storage, key, value)
    }

    // The loaded value is written back right away, same as any later change.
    fn settle(storage: S, key: String, value: T) -> Self {
        let mut cell = Self {
            storage,
            key,
            value,
            durable: true,
        };
        if let Err(e) = cell.flush() {
            log::warn!("[STORE] Initial write of '{}' failed: {}", cell.key, e);
        }
        cell
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and persist it
    ///
    /// The in-memory value is replaced even when persisting fails.
    pub fn write(&mut self, value: T) -> StoreResult<()> {
        self.value = value;
        self.flush()
    }

    /// Whether the last write reached storage
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    fn flush(&mut self) -> StoreResult<()> {
        let result = serde_json::to_string(&self.value)
            .map_err(StoreError::from)
            .and_then(|json| self.storage.set_item(&self.key, &json));
        self.durable = result.is_ok();
        result
    }
}

fn read_raw<S: Storage>(storage: &S, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("[STORE] Reading '{}' failed, using default: {}", key, e);
            None
        }
    }
}
