//! Length-framed encoding
//!
//! Every name and value is written as its UTF-8 byte length in decimal, a
//! `:`, then the bytes themselves. Chunks alternate name, value, name, value
//! with no separators, so field content is never interpreted.
//!
//! ```text
//! {"name": "alice", "age": "30"}  =>  4:name5:alice3:age2:30
//! ```

use crate::error::DecodeError;
use membase_core::Record;
use std::fmt::Write;

/// Encode a record in the framed format.
pub fn encode(record: &Record) -> String {
    let mut out = String::with_capacity(
        record
            .iter()
            .map(|(k, v)| k.len() + v.len() + 8)
            .sum(),
    );
    for (name, value) in record {
        push_chunk(&mut out, name);
        push_chunk(&mut out, value);
    }
    out
}

fn push_chunk(out: &mut String, chunk: &str) {
    // Writing to a String cannot fail
    let _ = write!(out, "{}:", chunk.len());
    out.push_str(chunk);
}

/// Decode a framed value into a record.
pub fn decode(value: &str) -> Result<Record, DecodeError> {
    let mut record = Record::new();
    let mut reader = ChunkReader { input: value, pos: 0 };
    while let Some(name) = reader.next_chunk()? {
        let field = reader.next_chunk()?.ok_or_else(|| DecodeError::DanglingField {
            field: name.to_string(),
        })?;
        record.insert(name.to_string(), field.to_string());
    }
    Ok(record)
}

struct ChunkReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    /// Next chunk, or `None` at a clean end of input.
    fn next_chunk(&mut self) -> Result<Option<&'a str>, DecodeError> {
        if self.pos == self.input.len() {
            return Ok(None);
        }
        let rest = &self.input[self.pos..];
        let colon = rest
            .find(':')
            .ok_or(DecodeError::MissingColon { offset: self.pos })?;
        let digits = &rest[..colon];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidLength {
                offset: self.pos,
                text: digits.to_string(),
            });
        }
        let len: usize = digits.parse().map_err(|_| DecodeError::InvalidLength {
            offset: self.pos,
            text: digits.to_string(),
        })?;

        let start = self.pos + colon + 1;
        let available = self.input.len() - start;
        if len > available {
            return Err(DecodeError::Truncated {
                offset: start,
                needed: len,
                available,
            });
        }
        let end = start + len;
        if !self.input.is_char_boundary(end) {
            return Err(DecodeError::CharBoundary { offset: end });
        }
        self.pos = end;
        Ok(Some(&self.input[start..end]))
    }
}
