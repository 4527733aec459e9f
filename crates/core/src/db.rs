//! The contract a benchmark harness drives.
//!
//! A harness creates one `Db` per client thread, calls [`Db::init`] once with
//! its configuration, then issues operations. Every operation returns a
//! `Result`; the harness converts it with [`Status::of`](crate::Status::of)
//! and keeps counting. Errors are values, never panics.
//!
//! ```ignore
//! let mut db = MembaseClient::new();
//! db.init(&properties)?;
//!
//! db.insert("usertable", "user1", &record)?;
//! let status = Status::of(&db.read("usertable", "user1", None));
//! ```

use crate::error::Result;
use crate::properties::Properties;
use crate::record::{FieldSet, Record};

/// A key-value backend the harness can benchmark.
pub trait Db: Send + Sync {
    /// Read configuration and connect.
    ///
    /// A failed init leaves the backend in place; subsequent operations
    /// fail instead of panicking.
    fn init(&mut self, properties: &Properties) -> Result<()>;

    /// Release resources at the end of a run.
    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read a record.
    ///
    /// `fields` names the requested subset; `None` means all fields.
    /// Backends may return more fields than requested.
    fn read(&self, table: &str, key: &str, fields: Option<&FieldSet>) -> Result<Record>;

    /// Read up to `record_count` records starting at `start_key`.
    fn scan(
        &self,
        table: &str,
        start_key: &str,
        record_count: usize,
        fields: Option<&FieldSet>,
    ) -> Result<Vec<Record>>;

    /// Replace the record stored under `key`.
    fn update(&self, table: &str, key: &str, values: &Record) -> Result<()>;

    /// Store a new record under `key`.
    fn insert(&self, table: &str, key: &str, values: &Record) -> Result<()>;

    /// Remove the record stored under `key`.
    fn delete(&self, table: &str, key: &str) -> Result<()>;
}
