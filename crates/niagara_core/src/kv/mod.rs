//! Key-value persistence port.
//!
//! # Responsibility
//! - Model on-device string storage as `key -> value` with whole-value
//!   replacement, the only shape the saved-places store needs.
//! - Keep SQL details out of the store.
//!
//! # Invariants
//! - `set_item` replaces the stored value wholesale; there are no partial writes.
//! - A missing key reads as `None`, never as an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type KvResult<T> = Result<T, KvError>;

/// Failures of the underlying storage medium.
#[derive(Debug)]
pub enum KvError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Connection schema is not at the migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from an expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "key-value store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "key-value store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "key-value store requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String storage keyed by fixed literal keys.
pub trait KeyValueStore {
    /// Reads the value under `key`, or `None` if nothing was ever written.
    fn get_item(&self, key: &str) -> KvResult<Option<String>>;
    /// Replaces the value under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> KvResult<()>;
    /// Deletes `key`. Deleting a missing key succeeds.
    fn remove_item(&mut self, key: &str) -> KvResult<()>;
}
