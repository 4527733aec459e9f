//! Core types for the Membase benchmark binding
//!
//! This crate defines the vocabulary shared by the rest of the workspace:
//! - Record: insertion-ordered field map exchanged with the harness
//! - Status: integer outcome codes the harness counts (0 / -1)
//! - Operation: the harness operations, used for logging and errors
//! - DbError: unified error type for all adapter failures
//! - Db: the contract a harness drives
//! - Properties: string-keyed configuration with defaults

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod db;
pub mod error;
pub mod properties;
pub mod record;
pub mod status;

pub use db::Db;
pub use error::{DbError, Result};
pub use properties::Properties;
pub use record::{FieldSet, Record};
pub use status::{Operation, Status};
