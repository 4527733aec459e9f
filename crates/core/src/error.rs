//! Error types for the Membase binding.
//!
//! Every failure an adapter can hit is one of these variants. The harness
//! never sees a panic: operations return `Err(DbError)`, which
//! [`DbError::status`] collapses to [`Status::Error`].

use crate::status::{Operation, Status};
use thiserror::Error;

/// All adapter errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Key has no stored value
    #[error("{key} not found while doing {operation}")]
    NotFound {
        /// The missing key
        key: String,
        /// Operation that looked the key up
        operation: Operation,
    },

    /// Store answered but refused the operation
    #[error("{operation} failed for {key}")]
    Rejected {
        /// Key the operation targeted
        key: String,
        /// Operation that was refused
        operation: Operation,
    },

    /// Operation is not supported by this store
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// No client handle: init was never called or failed
    #[error("client not initialized")]
    NotInitialized,

    /// Host name could not be resolved
    #[error("IP address of host could not be determined: {0}")]
    UnknownHost(String),

    /// Could not reach the store
    #[error("could not connect to host at {address}: {reason}")]
    Connection {
        /// Address that was dialed
        address: String,
        /// Underlying failure
        reason: String,
    },

    /// Bootstrap URI could not be built or parsed
    #[error("bad URI: {0}")]
    BadUri(String),

    /// Cluster answered with an unusable topology
    #[error("bootstrap error: {0}")]
    Bootstrap(String),

    /// Transport or protocol error from the client library
    #[error("store error: {0}")]
    Store(String),

    /// Value could not be encoded or decoded
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Status code the harness records for this error.
    ///
    /// Every error is reported as [`Status::Error`].
    pub fn status(&self) -> Status {
        Status::Error
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }

    /// Check if this is the unsupported-operation signal.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DbError::Unsupported(_))
    }

    /// Check if this error came from connecting rather than from an operation.
    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            DbError::UnknownHost(_)
                | DbError::Connection { .. }
                | DbError::BadUri(_)
                | DbError::Bootstrap(_)
        )
    }
}
