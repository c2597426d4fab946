//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::format::OutputMode;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Write the default config file.
    Init,
    /// Tokenize the given titles, or stdin lines when empty.
    Tokenize { titles: Vec<String> },
    /// Count one CSV column into the store.
    Extract {
        file: PathBuf,
        field: usize,
        dry_run: bool,
    },
    /// Dump the store as CSV.
    Export,
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub debug: bool,
    pub mode: OutputMode,
}

/// Read the global flags.
pub fn global_options(matches: &ArgMatches) -> GlobalOptions {
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };
    GlobalOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        store: matches.get_one::<PathBuf>("store").cloned(),
        debug: matches.get_flag("debug"),
        mode,
    }
}

/// Convert clap matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("init", _)) => Ok(CliAction::Init),
        Some(("tokenize", sub)) => Ok(CliAction::Tokenize {
            titles: sub
                .get_many::<String>("titles")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
        }),
        Some(("extract", sub)) => {
            let file = sub
                .get_one::<PathBuf>("file")
                .cloned()
                .ok_or("Missing CSV file")?;
            let field = *sub
                .get_one::<usize>("field")
                .ok_or("Missing --field")?;
            Ok(CliAction::Extract {
                file,
                field,
                dry_run: sub.get_flag("dry-run"),
            })
        }
        Some(("export", _)) => Ok(CliAction::Export),
        Some((name, _)) => Err(format!("Unknown command: {}", name)),
        None => Err("No command given".to_string()),
    }
}
