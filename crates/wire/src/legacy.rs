//! Legacy tab/newline encoding
//!
//! Each entry is `name` + `\n` + `value`; entries are joined with `\t`.
//! Nothing is escaped, so a name containing `\t` or `\n`, or a value
//! containing `\t`, cannot be represented. [`encode`] rejects such records.
//!
//! Decoding splits on `\t`, then splits each entry at its first `\n`; the
//! rest of the entry is the value. Trailing empty entries are dropped, so a
//! value ending in `\t` still decodes.

use crate::error::{DecodeError, EncodeError};
use membase_core::Record;

const ENTRY_SEPARATOR: char = '\t';
const FIELD_SEPARATOR: char = '\n';

/// Encode a record in the legacy format.
pub fn encode(record: &Record) -> Result<String, EncodeError> {
    let mut out = String::with_capacity(encoded_len(record));
    for (i, (name, value)) in record.iter().enumerate() {
        check_name(name)?;
        if value.contains(ENTRY_SEPARATOR) {
            return Err(EncodeError::Delimiter {
                field: name.clone(),
                delimiter: "tab",
            });
        }
        if i > 0 {
            out.push(ENTRY_SEPARATOR);
        }
        out.push_str(name);
        out.push(FIELD_SEPARATOR);
        out.push_str(value);
    }
    Ok(out)
}

/// Decode a legacy value into a record.
///
/// The empty string decodes to the empty record. Repeated names keep the
/// last value.
pub fn decode(value: &str) -> Result<Record, DecodeError> {
    let mut record = Record::new();
    let entries: Vec<&str> = value.split(ENTRY_SEPARATOR).collect();
    let used = entries
        .iter()
        .rposition(|entry| !entry.is_empty())
        .map_or(0, |last| last + 1);
    for (index, entry) in entries[..used].iter().enumerate() {
        let (name, field) = entry
            .split_once(FIELD_SEPARATOR)
            .ok_or(DecodeError::MissingSeparator { index })?;
        record.insert(name.to_string(), field.to_string());
    }
    Ok(record)
}

fn check_name(name: &str) -> Result<(), EncodeError> {
    let delimiter = if name.contains(ENTRY_SEPARATOR) {
        "tab"
    } else if name.contains(FIELD_SEPARATOR) {
        "newline"
    } else {
        return Ok(());
    };
    Err(EncodeError::Delimiter {
        field: name.to_string(),
        delimiter,
    })
}

fn encoded_len(record: &Record) -> usize {
    record.iter().map(|(k, v)| k.len() + v.len() + 2).sum()
}
