//! String-valued key-value persistence.
//!
//! # Responsibility
//! - Define the narrow `get`/`set` contract the task store depends on.
//! - Provide SQLite and in-memory backends.
//!
//! # Invariants
//! - `set` overwrites the whole value for a key; there are no partial writes.
//! - `get` on an unknown key is `Ok(None)`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Key under which the serialized task list lives.
pub const TASKS_KEY: &str = "tasks";

pub type KvResult<T> = Result<T, KvError>;

/// Backend failure while reading or writing a key.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Backend refused the write (used by stores with a capacity limit).
    Rejected(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Rejected(reason) => write!(f, "write rejected: {reason}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Rejected(_) => None,
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

/// Persistence contract consumed by `TaskStore`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;
}
