//! Output formatting.

use membase_core::{DbError, Record, Status};
use serde_json::{json, Map, Value as JsonValue};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Successful result of a request.
#[derive(Debug)]
pub enum Output {
    Done,
    Record(Record),
    Records(Vec<Record>),
}

pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => match output {
            Output::Done => "OK".to_string(),
            Output::Record(record) => format_record(record),
            Output::Records(records) => records
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}) {}", i + 1, format_record(r).replace('\n', "\n   ")))
                .collect::<Vec<_>>()
                .join("\n"),
        },
        OutputMode::Json => {
            let body = match output {
                Output::Done => JsonValue::Null,
                Output::Record(record) => record_json(record),
                Output::Records(records) => records.iter().map(record_json).collect(),
            };
            json!({"status": Status::Ok.code(), "result": body}).to_string()
        }
    }
}

pub fn format_error(err: &DbError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", err),
        OutputMode::Json => json!({
            "status": err.status().code(),
            "error": err.to_string(),
        })
        .to_string(),
    }
}

fn format_record(record: &Record) -> String {
    if record.is_empty() {
        return "(empty record)".to_string();
    }
    record
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

fn record_json(record: &Record) -> JsonValue {
    let map: Map<String, JsonValue> = record
        .iter()
        .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
        .collect();
    JsonValue::Object(map)
}
