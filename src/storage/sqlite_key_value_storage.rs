use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use super::KeyValueStorage;

const SCHEMA_VERSION: i64 = 1;

/// `KeyValueStorage` backed by a single-table SQLite database, the same
/// thing the mobile platforms use underneath their key-value APIs.
pub struct SqliteKeyValueStorage {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStorage {
    /// Opens (or creates) the storage database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("Failed to open storage database {:?}", path.as_ref()))?;
        info!("Opened key-value storage at {:?}", path.as_ref());
        Self::init(conn)
    }

    /// Opens an in-memory storage database that dies with the process.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        match version {
            0 => {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS key_value (
                        key TEXT PRIMARY KEY NOT NULL,
                        value TEXT NOT NULL,
                        updated INTEGER NOT NULL DEFAULT (cast(strftime('%s','now') as int))
                    );",
                    params![],
                )?;
                conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
            }
            SCHEMA_VERSION => {}
            other => bail!("Unsupported key-value storage schema version: {}", other),
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStorage for SqliteKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read storage key {}", key))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated = cast(strftime('%s','now') as int)",
            params![key, value],
        )
        .with_context(|| format!("Failed to write storage key {}", key))?;
        Ok(())
    }
}
