use anyhow::Result;

/// On-device key-value storage capability.
///
/// Mirrors what every mobile platform offers the app: string keys mapped
/// to string values, read at startup and written through on change.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`.
    /// Returns Ok(None) if the key has never been written.
    /// Returns Err if the storage backend fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    /// Returns Err if the storage backend fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
