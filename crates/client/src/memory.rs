//! In-memory store.
//!
//! Behaves like a single memcached server with unlimited memory. Expiration
//! is ignored. Useful for tests and for dry runs of a workload without a
//! cluster.

use crate::store::KeyValueStore;
use dashmap::DashMap;
use membase_core::Result;

/// A [`KeyValueStore`] backed by a concurrent hash map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored value, bypassing decoding.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str, _expiration: u32) -> Result<bool> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
