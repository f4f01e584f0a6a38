use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const TABLE: &str = "kv";

#[derive(Error, Debug)]
pub enum KVStoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not (de)serialize value: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// SQLite-backed key-value store. Values are stored as JSON blobs, so any
/// serde-serializable type round-trips.
pub struct KVDb(Connection);

impl KVDb {
    /// Opens the store at `path`, creating the file, its parent directory
    /// and the backing table if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, KVStoreError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let connection = Connection::open(path)?;
        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS '{TABLE}' (
                key TEXT PRIMARY KEY NOT NULL,
                value BLOB NOT NULL
                )"
            ),
            [],
        )?;
        Ok(KVDb(connection))
    }

    pub fn get<T: DeserializeOwned>(&self, key: impl AsRef<str>) -> Result<Option<T>, KVStoreError> {
        self.0
            .query_row(
                &format!("SELECT value FROM '{TABLE}' WHERE key = ?1"),
                [key.as_ref()],
                |r| r.get::<_, Vec<u8>>(0),
            )
            .optional()?
            .map(|v| serde_json::from_slice::<T>(&v))
            .transpose()
            .map_err(Into::into)
    }

    pub fn set<K: AsRef<str>, V: Serialize>(&self, key: K, value: V) -> Result<(), KVStoreError> {
        let blob = serde_json::to_vec(&value)?;
        let mut stmt = self.0.prepare(&format!(
            "INSERT INTO '{TABLE}' (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value=?2",
        ))?;
        stmt.execute(params![key.as_ref(), blob])?;
        log::trace!("Set key '{}'", key.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Blob {
        name: String,
        count: u32,
    }

    fn temp_db() -> (tempfile::TempDir, KVDb) {
        let dir = tempfile::tempdir().unwrap();
        let db = KVDb::new(dir.path().join("sub/store.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn roundtrips_structs() {
        let (_dir, db) = temp_db();
        let blob = Blob {
            name: "falcon".into(),
            count: 9,
        };
        db.set("blob", &blob).unwrap();
        assert_eq!(db.get::<Blob>("blob").unwrap().unwrap(), blob);
    }

    #[test]
    fn missing_key_is_none() {
        let (_dir, db) = temp_db();
        assert!(db.get::<String>("nothing").unwrap().is_none());
    }

    #[test]
    fn set_overwrites() {
        let (_dir, db) = temp_db();
        db.set("k", 1).unwrap();
        db.set("k", 2).unwrap();
        assert_eq!(db.get::<i64>("k").unwrap(), Some(2));
    }

    #[test]
    fn reopen_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        KVDb::new(&path).unwrap().set("k", "v").unwrap();
        let db = KVDb::new(&path).unwrap();
        assert_eq!(db.get::<String>("k").unwrap().as_deref(), Some("v"));
    }
}
