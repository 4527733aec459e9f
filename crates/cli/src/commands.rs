//! Command-line definition.

use clap::{Arg, ArgAction, Command};

/// Build the `membase` command.
pub fn build_cli() -> Command {
    Command::new("membase")
        .about("Issue single benchmark operations against a Membase bucket")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('P')
                .long("config")
                .value_name("FILE")
                .action(ArgAction::Append)
                .global(true)
                .help("TOML property file; later files override earlier ones"),
        )
        .arg(
            Arg::new("property")
                .short('p')
                .long("property")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .global(true)
                .help("Set a property, overriding config files"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Raise log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("read")
                .about("Fetch a record")
                .arg(table_arg())
                .arg(key_arg())
                .arg(fields_arg()),
        )
        .subcommand(
            Command::new("insert")
                .about("Store a new record")
                .arg(table_arg())
                .arg(key_arg())
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Overwrite a record")
                .arg(table_arg())
                .arg(key_arg())
                .arg(values_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove a record")
                .arg(table_arg())
                .arg(key_arg()),
        )
        .subcommand(
            Command::new("scan")
                .about("Range scan (not supported by Membase)")
                .arg(table_arg())
                .arg(Arg::new("start").required(true).help("First key"))
                .arg(
                    Arg::new("count")
                        .required(true)
                        .value_parser(clap::value_parser!(usize))
                        .help("Number of records"),
                )
                .arg(fields_arg()),
        )
}

fn table_arg() -> Arg {
    Arg::new("table").required(true).help("Table name")
}

fn key_arg() -> Arg {
    Arg::new("key").required(true).help("Record key")
}

fn fields_arg() -> Arg {
    Arg::new("field")
        .short('f')
        .long("field")
        .action(ArgAction::Append)
        .help("Field to read; repeat for more")
}

fn values_arg() -> Arg {
    Arg::new("values")
        .value_name("FIELD=VALUE")
        .required(true)
        .num_args(1..)
        .help("Field assignments")
}
