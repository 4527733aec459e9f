//! Convenient imports for harness code.
//!
//! ```ignore
//! use membase_ycsb::prelude::*;
//!
//! let mut db = MembaseClient::new();
//! db.init(&Properties::new())?;
//! ```

// Adapter and handles
pub use membase_client::{
    ConnectionConfig, InMemoryStore, KeyValueStore, MembaseClient, NO_EXPIRATION,
};

// Harness contract
pub use membase_core::record::record_of;
pub use membase_core::{Db, DbError, FieldSet, Operation, Properties, Record, Result, Status};

// Encodings
pub use membase_wire::Encoding;
