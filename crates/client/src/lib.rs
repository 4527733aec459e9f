//! Membase adapter for benchmark harnesses
//!
//! This crate binds the harness [`Db`](membase_core::Db) contract to a
//! Membase bucket:
//!
//! - [`MembaseClient`]: the adapter (read, insert, update, delete; scan is
//!   unsupported)
//! - [`KeyValueStore`]: the client handle seam the adapter delegates to
//! - [`MemcacheStore`]: handle backed by the `memcache` crate
//! - [`InMemoryStore`]: handle backed by a concurrent map
//! - [`bootstrap`]: node discovery through the REST API on port 8091
//! - [`ConnectionConfig`]: address, bucket and password read at init
//!
//! ## Configuration
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `memcached.address` | `localhost` | cluster host |
//! | `membase.bucket` | `default` | bucket name |
//! | `membase.password` | (empty) | bucket password |
//! | `membase.encoding` | `framed` | `framed` or `legacy` |
//! | `membase.bootstrap` | `true` | discover nodes via REST |
//! | `memcached.port` | `11211` | port when bootstrap is off |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod bootstrap;
pub mod config;
pub mod memcached;
pub mod memory;
pub mod store;

pub use adapter::{open_store, MembaseClient, SCAN_UNSUPPORTED};
pub use config::ConnectionConfig;
pub use memcached::MemcacheStore;
pub use memory::InMemoryStore;
pub use store::{KeyValueStore, NO_EXPIRATION};
