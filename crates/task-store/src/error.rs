//! Store Errors
//!
//! Only storage I/O can fail. Malformed data is normalized, never reported.

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage backend cannot be used at all (disabled, private mode)
    Unavailable(String),
    /// Reading a key failed
    Read(String),
    /// Writing a key failed (quota exceeded, storage disabled)
    Write(String),
    /// The value could not be encoded as JSON
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StoreError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
