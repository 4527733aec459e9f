//! membase CLI: run one benchmark operation against a Membase bucket.
//!
//! ```text
//! membase -p memcached.address=membase1 insert usertable user1 name=alice age=30
//! membase -P cluster.toml --json read usertable user1
//! ```
//!
//! Exit codes: 0 on OK, 1 when the operation (or connecting) fails, 2 on
//! usage or configuration errors.

mod commands;
mod format;
mod parse;

use std::process;

use membase_client::MembaseClient;
use membase_core::{Db, Result as DbResult};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, Output, OutputMode};
use parse::{load_properties, matches_to_request, Request};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let properties = match load_properties(&matches) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(2);
        }
    };

    let request = match matches_to_request(&matches) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    debug!(properties = properties.len(), request = ?request, "starting");

    let mut db = MembaseClient::new();
    if let Err(e) = db.init(&properties) {
        eprintln!("{}", format_error(&e, mode));
        process::exit(1);
    }

    match execute(&db, request) {
        Ok(output) => {
            println!("{}", format_output(&output, mode));
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(db: &dyn Db, request: Request) -> DbResult<Output> {
    match request {
        Request::Read { table, key, fields } => {
            db.read(&table, &key, fields.as_ref()).map(Output::Record)
        }
        Request::Scan {
            table,
            start_key,
            count,
            fields,
        } => db
            .scan(&table, &start_key, count, fields.as_ref())
            .map(Output::Records),
        Request::Insert { table, key, values } => {
            db.insert(&table, &key, &values).map(|_| Output::Done)
        }
        Request::Update { table, key, values } => {
            db.update(&table, &key, &values).map(|_| Output::Done)
        }
        Request::Delete { table, key } => db.delete(&table, &key).map(|_| Output::Done),
    }
}
