//! Encoding and decoding errors

use membase_core::DbError;
use thiserror::Error;

/// A record could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Field content contains a delimiter of the legacy format
    #[error("field {field:?} contains a {delimiter} delimiter")]
    Delimiter {
        /// Offending field name
        field: String,
        /// Which delimiter collided
        delimiter: &'static str,
    },
}

/// A stored value could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Legacy entry without a name/value separator
    #[error("entry {index} has no name/value separator")]
    MissingSeparator {
        /// Zero-based entry position
        index: usize,
    },

    /// Framed length prefix not terminated by `:`
    #[error("missing ':' after length at offset {offset}")]
    MissingColon {
        /// Byte offset of the length prefix
        offset: usize,
    },

    /// Framed length prefix is not a decimal number
    #[error("invalid length {text:?} at offset {offset}")]
    InvalidLength {
        /// Byte offset of the length prefix
        offset: usize,
        /// Raw prefix text
        text: String,
    },

    /// Framed chunk runs past the end of the value
    #[error("chunk at offset {offset} needs {needed} bytes, {available} available")]
    Truncated {
        /// Byte offset of the chunk body
        offset: usize,
        /// Declared length
        needed: usize,
        /// Bytes left in the value
        available: usize,
    },

    /// Framed chunk boundary falls inside a UTF-8 character
    #[error("chunk boundary at offset {offset} splits a character")]
    CharBoundary {
        /// Byte offset of the bad boundary
        offset: usize,
    },

    /// Framed value ends after a field name
    #[error("field {field:?} has no value")]
    DanglingField {
        /// Name without a value
        field: String,
    },
}

impl From<EncodeError> for DbError {
    fn from(e: EncodeError) -> Self {
        DbError::Encoding(e.to_string())
    }
}

impl From<DecodeError> for DbError {
    fn from(e: DecodeError) -> Self {
        DbError::Encoding(e.to_string())
    }
}
