//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ckw")
        .about("Keyword candidates for procurement contract titles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./keywords.toml if present)")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Keyword store path (overrides store_path in the config)")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (no numbering, no quotes)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Log at debug level")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_init())
        .subcommand(build_tokenize())
        .subcommand(build_extract())
        .subcommand(build_export())
}

fn build_init() -> Command {
    Command::new("init").about("Write a commented keywords.toml if none exists")
}

fn build_tokenize() -> Command {
    Command::new("tokenize")
        .about("Print the keyword candidates of each title")
        .long_about(
            "Print the keyword candidates of each title.\n\n\
             With no titles, reads one title per line from stdin.",
        )
        .arg(
            Arg::new("titles")
                .help("Titles to tokenize")
                .num_args(0..)
                .value_name("TITLE"),
        )
}

fn build_extract() -> Command {
    Command::new("extract")
        .about("Count keywords of a CSV title column into the store")
        .arg(
            Arg::new("field")
                .long("field")
                .short('f')
                .help("Zero-based column holding the title")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the title column and exit without counting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .help("CSV file of contract records")
                .required(true)
                .value_parser(value_parser!(std::path::PathBuf)),
        )
}

fn build_export() -> Command {
    Command::new("export").about("Write cumulative keyword counts as CSV, most frequent first")
}
