//! Operation status codes.
//!
//! The harness counts outcomes as integers: 0 for success, -1 for failure.

use std::fmt;

/// Outcome of a harness operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Operation succeeded (code 0)
    Ok,
    /// Operation failed (code -1)
    Error,
}

impl Status {
    /// Integer code reported to the harness.
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Error => -1,
        }
    }

    /// Collapse an operation result to its status.
    pub fn of<T, E>(result: &std::result::Result<T, E>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(_) => Status::Error,
        }
    }

    /// Check for success.
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> i32 {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// Harness operations.
///
/// `Display` yields the store-level command name used in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch a record
    Read,
    /// Range scan
    Scan,
    /// Overwrite a record
    Update,
    /// Store a new record
    Insert,
    /// Remove a record
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Read => "GET",
            Operation::Scan => "SCAN",
            Operation::Update => "UPDATE",
            Operation::Insert => "SET",
            Operation::Delete => "DELETE",
        };
        f.write_str(name)
    }
}
