//! The client handle seam.
//!
//! [`MembaseClient`](crate::MembaseClient) never talks to a socket itself. It
//! holds an `Arc<dyn KeyValueStore>` and delegates each operation to it, so
//! the handle can be shared between adapter instances and swapped for an
//! in-memory store in tests.

use membase_core::Result;

/// Expiration value meaning "never expire".
pub const NO_EXPIRATION: u32 = 0;

/// Blocking key-value operations over string values.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// `Ok(None)` means the key has no value.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key` unconditionally.
    ///
    /// Returns `Ok(false)` when the store answered but refused the write.
    fn set(&self, key: &str, value: &str, expiration: u32) -> Result<bool>;

    /// Remove `key`.
    ///
    /// Returns `Ok(false)` when there was nothing to delete or the store
    /// refused.
    fn delete(&self, key: &str) -> Result<bool>;
}
