//! Core of the taskpad to-do list.
//!
//! The store owns the list and persists every change through a key-value
//! backend; the coordinator relays changes to a rendering surface and
//! surface intents back to the store.

pub mod coordinator;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;

pub use coordinator::Coordinator;
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKvStore, SqliteKvStore, TASKS_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{seed_tasks, Task, TaskId, TaskValidationError};
pub use render::{raise_intent, IntentHandlers, RenderSurface, UserIntent, EMPTY_PLACEHOLDER};
pub use store::task_store::{LoadSource, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
