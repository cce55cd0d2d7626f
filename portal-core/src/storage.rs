//! redb-based key-value storage layer
//!
//! All persisted state lives as three entries in a single redb table:
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `portal_db` | JSON `Document` | The whole persisted dataset |
//! | `auth_token` | email string | Current session token |
//! | `unverified_email` | email string | Pending-verification marker |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default, so every `put`
//! is on disk when it returns. The store mirrors the whole in-memory
//! document into `portal_db` after each mutation; there are no partial
//! writes.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single key-value table: key = entry name, value = raw bytes
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Entry holding the JSON-serialized document
pub const DOCUMENT_KEY: &str = "portal_db";

/// Entry holding the authenticated account's email (bare string)
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Entry holding the email address pending verification
pub const UNVERIFIED_EMAIL_KEY: &str = "unverified_email";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::AppError {
    fn from(err: StorageError) -> Self {
        shared::AppError::with_message(shared::ErrorCode::StorageFailure, err.to_string())
    }
}

/// Persistent key-value store backed by redb
///
/// Cheap to clone; all clones share one database handle.
#[derive(Clone)]
pub struct PortalStorage {
    db: Arc<Database>,
}

impl PortalStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read an entry; `None` if absent
    pub fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Read an entry as a UTF-8 string; undecodable bytes count as absent
    pub fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key)?.and_then(|bytes| String::from_utf8(bytes).ok()))
    }

    /// Write an entry, overwriting any previous value
    pub fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Write a string entry
    pub fn put_string(&self, key: &str, value: &str) -> StorageResult<()> {
        self.put(key, value.as_bytes())
    }

    /// Remove an entry; removing a missing entry is not an error
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let storage = PortalStorage::open_in_memory().unwrap();

        assert_eq!(storage.get("missing").unwrap(), None);

        storage.put("k", b"value").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some(b"value".to_vec()));

        storage.put("k", b"replaced").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some(b"replaced".to_vec()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = PortalStorage::open_in_memory().unwrap();

        storage.put_string(AUTH_TOKEN_KEY, "admin@example.com").unwrap();
        storage.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);

        // Removing again is fine
        storage.remove(AUTH_TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_string_helpers() {
        let storage = PortalStorage::open_in_memory().unwrap();

        storage.put_string("email", "bob@x.com").unwrap();
        assert_eq!(storage.get_string("email").unwrap().as_deref(), Some("bob@x.com"));

        storage.put("binary", &[0xff, 0xfe]).unwrap();
        assert_eq!(storage.get_string("binary").unwrap(), None);
    }
}
