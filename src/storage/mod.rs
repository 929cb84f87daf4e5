mod key_value_storage;
mod memory_key_value_storage;
mod sqlite_key_value_storage;

pub use key_value_storage::KeyValueStorage;
pub use memory_key_value_storage::MemoryKeyValueStorage;
pub use sqlite_key_value_storage::SqliteKeyValueStorage;

#[cfg(feature = "mock")]
pub use key_value_storage::MockKeyValueStorage;
