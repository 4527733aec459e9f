//! # membase-ycsb
//!
//! Membase binding for YCSB-style benchmark harnesses.
//!
//! The harness speaks in records (field name to value maps) and four
//! operations. This crate maps them onto a Membase bucket, where each record
//! is one memcached value.
//!
//! ## Quick Start
//!
//! ```ignore
//! use membase_ycsb::prelude::*;
//!
//! let mut db = MembaseClient::new();
//! db.init(&Properties::new()
//!     .with("memcached.address", "membase1")
//!     .with("membase.bucket", "users"))?;
//!
//! let record = record_of([("name", "alice"), ("age", "30")]);
//! db.insert("usertable", "user1", &record)?;
//!
//! let status = Status::of(&db.read("usertable", "user1", None));
//! assert_eq!(status.code(), 0);
//! ```
//!
//! ## Crates
//!
//! - `membase-core` - records, status codes, errors, the [`Db`] contract
//! - `membase-wire` - value encodings (framed and legacy)
//! - `membase-client` - the adapter, client handles and cluster bootstrap

#![warn(missing_docs)]

pub mod prelude;

// Re-export main entry points
pub use membase_client::{ConnectionConfig, InMemoryStore, KeyValueStore, MembaseClient};
pub use membase_core::{Db, DbError, Properties, Record, Result, Status};
pub use membase_wire::Encoding;
