//! ArgMatches → Request conversion.
//!
//! Translates clap's parsed arguments into:
//! - the harness `Properties` (config files, then `-p` overrides)
//! - one `Request` to run against the adapter

use clap::ArgMatches;
use membase_core::{FieldSet, Properties, Record, Result as DbResult};

/// One adapter operation.
#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Read {
        table: String,
        key: String,
        fields: Option<FieldSet>,
    },
    Scan {
        table: String,
        start_key: String,
        count: usize,
        fields: Option<FieldSet>,
    },
    Insert {
        table: String,
        key: String,
        values: Record,
    },
    Update {
        table: String,
        key: String,
        values: Record,
    },
    Delete {
        table: String,
        key: String,
    },
}

/// Build properties from `-P` files and `-p` overrides, in that order.
pub fn load_properties(matches: &ArgMatches) -> DbResult<Properties> {
    let mut props = Properties::new();
    if let Some(files) = matches.get_many::<String>("config") {
        for file in files {
            props.merge(&Properties::load(file)?);
        }
    }
    if let Some(overrides) = matches.get_many::<String>("property") {
        for assignment in overrides {
            props.apply_override(assignment)?;
        }
    }
    Ok(props)
}

/// Convert clap ArgMatches into a Request.
pub fn matches_to_request(matches: &ArgMatches) -> Result<Request, String> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let table = required(sub, "table")?;
    match sub_name {
        "read" => Ok(Request::Read {
            table,
            key: required(sub, "key")?,
            fields: field_set(sub),
        }),
        "scan" => Ok(Request::Scan {
            table,
            start_key: required(sub, "start")?,
            count: sub
                .get_one::<usize>("count")
                .copied()
                .ok_or_else(|| "Missing count".to_string())?,
            fields: field_set(sub),
        }),
        "insert" => Ok(Request::Insert {
            table,
            key: required(sub, "key")?,
            values: assignments(sub)?,
        }),
        "update" => Ok(Request::Update {
            table,
            key: required(sub, "key")?,
            values: assignments(sub)?,
        }),
        "delete" => Ok(Request::Delete {
            table,
            key: required(sub, "key")?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing {}", name))
}

fn field_set(matches: &ArgMatches) -> Option<FieldSet> {
    matches
        .get_many::<String>("field")
        .map(|fields| fields.cloned().collect())
}

fn assignments(matches: &ArgMatches) -> Result<Record, String> {
    let mut record = Record::new();
    for raw in matches.get_many::<String>("values").into_iter().flatten() {
        let (field, value) = parse_assignment(raw)?;
        record.insert(field, value);
    }
    Ok(record)
}

/// Split `field=value` at the first `=`. The value may be empty.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("Expected FIELD=VALUE, got {:?}", raw)),
    }
}
