//! Persistent key-value storage and the repositories built on it.
//!
//! The engine's storage contract is a namespaced string key-value store
//! with JSON-serialized values, backed by a single SQLite table. All access
//! goes through [`Store`], which serializes readers and writers behind one
//! async mutex; the repositories in [`location`] and [`timings_cache`] own
//! the key layout and the (de)serialization of their records.

pub mod location;
pub mod timings_cache;

use std::path::Path;
use std::sync::Arc;

use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::Mutex;

use crate::error::Error;

/// Storage key layout. Every key the engine writes lives under the
/// `vakit:` namespace.
pub mod key {
    use chrono::NaiveDate;

    /// The persisted [`crate::model::LocationSpec`].
    pub const LOCATION: &str = "vakit:location";

    /// The location-agnostic current-day fast cache slot.
    pub const CURRENT_TIMINGS: &str = "vakit:timings:today";

    /// The collaborator snapshot consumed by notification/widget surfaces.
    pub const COLLABORATOR_SNAPSHOT: &str = "vakit:widget";

    /// Multi-day cache entry for one `(location key, date)` identity.
    pub fn timings(location_key: &str, date: NaiveDate) -> String {
        format!("vakit:timings:{}:{}", location_key, date.format("%Y-%m-%d"))
    }
}

/// SQLite-backed key-value store.
///
/// Cheap to clone; clones share one connection. Reads and writes are await
/// points that take the connection mutex, so concurrent writers for the
/// same key overwrite in arrival order without interleaving.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (creating if needed) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Reads the value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let conn = self.conn.lock().await;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    /// Writes `value` under `key`, overwriting any previous value.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }

    /// Removes `key` if present.
    pub async fn delete(&self, key: &str) -> Result<(), Error> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Store;

    #[tokio::test]
    async fn put_get_delete_round_trip() {
        let store = Store::open_in_memory().unwrap();

        assert_eq!(store.get("vakit:test").await.unwrap(), None);

        store.put("vakit:test", "first").await.unwrap();
        assert_eq!(
            store.get("vakit:test").await.unwrap(),
            Some("first".to_string())
        );

        store.put("vakit:test", "second").await.unwrap();
        assert_eq!(
            store.get("vakit:test").await.unwrap(),
            Some("second".to_string())
        );

        store.delete("vakit:test").await.unwrap();
        assert_eq!(store.get("vakit:test").await.unwrap(), None);
    }
}
