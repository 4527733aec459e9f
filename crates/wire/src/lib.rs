//! Value encodings for the Membase binding
//!
//! Memcached stores one opaque string per key. This crate flattens a
//! [`Record`] into that string and back.
//!
//! ## Encodings
//!
//! | Encoding | Layout | Delimiter-safe |
//! |----------|--------|----------------|
//! | Framed (default) | `<len>:<name><len>:<value>...` | yes |
//! | Legacy | `name\nvalue\tname\nvalue` | no |
//!
//! Legacy matches values written by older YCSB Membase clients. Its encoder
//! refuses records whose content would collide with the delimiters instead of
//! writing a value that cannot be read back.
//!
//! ## Examples
//!
//! ```
//! use membase_core::record::record_of;
//! use membase_wire::Encoding;
//!
//! let record = record_of([("name", "alice"), ("age", "30")]);
//!
//! let legacy = Encoding::Legacy.encode(&record).unwrap();
//! assert_eq!(legacy, "name\nalice\tage\n30");
//!
//! let framed = Encoding::Framed.encode(&record).unwrap();
//! assert_eq!(framed, "4:name5:alice3:age2:30");
//! assert_eq!(Encoding::Framed.decode(&framed).unwrap(), record);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod error;
pub mod framed;
pub mod legacy;

// Re-export main types
pub use encoding::Encoding;
pub use error::{DecodeError, EncodeError};
pub use membase_core::Record;
