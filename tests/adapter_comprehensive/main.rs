//! Adapter Comprehensive Test Suite
//!
//! Drives `MembaseClient` through the harness `Db` contract with in-process
//! client handles, so no cluster is needed.
//!
//! ## Key Verification Points
//!
//! 1. Insert/read/update/delete behave as a single-keyspace store
//! 2. Every failure surfaces as `Err` and status -1, never a panic
//! 3. Scan always reports the unsupported-operation signal
//! 4. A failed init leaves the adapter usable but failing
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test adapter_comprehensive
//! cargo test --test adapter_comprehensive crud::
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use membase_ycsb::prelude::*;

// Test modules
pub mod crud;
pub mod encoding;
pub mod lifecycle;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Default table name used by the tests
pub const TABLE: &str = "usertable";

/// Create an adapter over a fresh in-memory store
pub fn create_client(encoding: Encoding) -> (MembaseClient, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let client = MembaseClient::with_store(store.clone(), encoding);
    (client, store)
}

/// How a `ScriptedStore` answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Store answers but refuses writes and deletes
    Refuse,
    /// Every call fails at the transport level
    Fail,
}

/// A store that never succeeds, counting the calls it receives
#[derive(Debug)]
pub struct ScriptedStore {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T>(&self, refused: T) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Refuse => Ok(refused),
            Behavior::Fail => Err(DbError::Store("connection reset".into())),
        }
    }
}

impl KeyValueStore for ScriptedStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        self.answer(None)
    }

    fn set(&self, _key: &str, _value: &str, _expiration: u32) -> Result<bool> {
        self.answer(false)
    }

    fn delete(&self, _key: &str) -> Result<bool> {
        self.answer(false)
    }
}

/// Create an adapter over a store that never succeeds
pub fn create_scripted_client(behavior: Behavior) -> (MembaseClient, Arc<ScriptedStore>) {
    let store = Arc::new(ScriptedStore::new(behavior));
    let client = MembaseClient::with_store(store.clone(), Encoding::Framed);
    (client, store)
}

/// Records covering typical benchmark payloads
pub fn standard_test_records() -> Vec<(&'static str, Record)> {
    vec![
        ("single_field", record_of([("field0", "value0")])),
        (
            "ycsb_shape",
            (0..10)
                .map(|i| (format!("field{}", i), "x".repeat(100)))
                .collect(),
        ),
        ("unicode", record_of([("名前", "アリス"), ("emoji", "🌍")])),
        ("empty_value", record_of([("blank", "")])),
        ("name_and_age", record_of([("name", "alice"), ("age", "30")])),
    ]
}
