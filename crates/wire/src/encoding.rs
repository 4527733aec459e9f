//! Encoding selection

use crate::error::{DecodeError, EncodeError};
use crate::{framed, legacy};
use membase_core::{DbError, Record};
use std::fmt;
use std::str::FromStr;

/// How records are flattened into stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Length-framed chunks; any content round-trips
    #[default]
    Framed,
    /// Tab/newline delimited, compatible with older clients
    Legacy,
}

impl Encoding {
    /// Encode a record.
    pub fn encode(self, record: &Record) -> Result<String, EncodeError> {
        match self {
            Encoding::Framed => Ok(framed::encode(record)),
            Encoding::Legacy => legacy::encode(record),
        }
    }

    /// Decode a stored value.
    pub fn decode(self, value: &str) -> Result<Record, DecodeError> {
        match self {
            Encoding::Framed => framed::decode(value),
            Encoding::Legacy => legacy::decode(value),
        }
    }

    /// Configuration name of this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Framed => "framed",
            Encoding::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "framed" => Ok(Encoding::Framed),
            "legacy" => Ok(Encoding::Legacy),
            other => Err(DbError::Config(format!(
                "unknown encoding {:?} (expected framed or legacy)",
                other
            ))),
        }
    }
}
