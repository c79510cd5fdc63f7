//! In-memory key-value backend.

use super::{KeyValueStore, KvError, KvResult};
use std::collections::BTreeMap;

/// Map-backed store with an optional value-size quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
    max_value_len: Option<usize>,
    writes: usize,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes whose value is longer than `max_value_len` bytes.
    pub fn with_quota(max_value_len: usize) -> Self {
        Self {
            max_value_len: Some(max_value_len),
            ..Self::default()
        }
    }

    /// Pre-populates one entry without counting it as a write.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        if let Some(limit) = self.max_value_len {
            if value.len() > limit {
                return Err(KvError::Rejected(format!(
                    "value for `{key}` is {} bytes, quota is {limit}",
                    value.len()
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStore;
    use crate::kv::{KeyValueStore, KvError};

    #[test]
    fn set_overwrites_and_counts_writes() {
        let mut store = MemoryKvStore::new();
        assert_eq!(store.get("tasks").unwrap(), None);

        store.set("tasks", "[]").unwrap();
        store.set("tasks", "[1]").unwrap();

        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn quota_rejects_oversized_values() {
        let mut store = MemoryKvStore::with_quota(4).with_entry("tasks", "[]");

        let err = store.set("tasks", "[1,2,3]").unwrap_err();
        assert!(matches!(err, KvError::Rejected(_)));
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 0);
    }
}
