//! ckw: keyword candidates for procurement contract titles.
//!
//! Subcommands:
//! - `ckw tokenize [TITLE]...`: print the keywords of each title, or of each
//!   stdin line when no title is given and stdin is not a TTY (pipe mode)
//! - `ckw extract --field N FILE`: count one CSV column into the store
//! - `ckw export`: dump the cumulative counts as CSV
//! - `ckw init`: write a commented `keywords.toml`

mod commands;
mod format;
mod parse;
mod pipe;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use keyword_core::{Error, KeywordConfig, Result, CONFIG_FILE_NAME};
use keyword_store::{CsvTitleSource, Extractor, KeywordCounter, KeywordStore};
use keyword_tokenizer::Tokenizer;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use commands::build_cli;
use format::{
    format_entries_json, format_error, format_extract_summary, OutputMode,
};
use parse::{global_options, matches_to_action, CliAction, GlobalOptions};

fn main() {
    let matches = build_cli().get_matches();
    let opts = global_options(&matches);
    init_logging(opts.debug);

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let exit_code = match run(action, &opts) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format_error(&e, opts.mode));
            1
        }
    };
    process::exit(exit_code);
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// `--config` if given, else `./keywords.toml` if present, else defaults.
fn load_config(opts: &GlobalOptions) -> Result<KeywordConfig> {
    match &opts.config {
        Some(path) => KeywordConfig::from_file(path),
        None => {
            let path = Path::new(CONFIG_FILE_NAME);
            if path.exists() {
                KeywordConfig::from_file(path)
            } else {
                Ok(KeywordConfig::default())
            }
        }
    }
}

fn store_path(opts: &GlobalOptions, config: &KeywordConfig) -> PathBuf {
    opts.store
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store_path))
}

fn run(action: CliAction, opts: &GlobalOptions) -> Result<i32> {
    match action {
        CliAction::Init => run_init(opts),
        CliAction::Tokenize { titles } => run_tokenize(titles, &load_config(opts)?, opts.mode),
        CliAction::Extract {
            file,
            field,
            dry_run: true,
        } => run_dry_run(&file, field, &load_config(opts)?, opts.mode),
        CliAction::Extract { file, field, .. } => {
            let config = load_config(opts)?;
            run_extract(&file, field, &store_path(opts, &config), &config, opts.mode)
        }
        CliAction::Export => {
            let config = load_config(opts)?;
            run_export(&store_path(opts, &config), opts.mode)
        }
    }
}

fn run_init(opts: &GlobalOptions) -> Result<i32> {
    let path = opts
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    KeywordConfig::write_default_if_missing(&path)?;
    println!("{}", path.display());
    Ok(0)
}

fn run_tokenize(titles: Vec<String>, config: &KeywordConfig, mode: OutputMode) -> Result<i32> {
    let tokenizer = Tokenizer::from_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !titles.is_empty() {
        return Ok(pipe::run_titles(&tokenizer, &titles, &mut out, mode));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::invalid_input(
            "no titles given (pass them as arguments or pipe them on stdin)",
        ));
    }
    Ok(pipe::run_pipe(&tokenizer, stdin.lock(), &mut out, mode))
}

fn run_dry_run(file: &Path, field: usize, config: &KeywordConfig, mode: OutputMode) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let source = CsvTitleSource::open(file, field, config.has_headers)?;
    pipe::echo_titles(source, &mut out, mode)?;
    Ok(0)
}

fn run_extract(
    file: &Path,
    field: usize,
    store_path: &Path,
    config: &KeywordConfig,
    mode: OutputMode,
) -> Result<i32> {
    // Lock the store before reading any input.
    let store = KeywordStore::open(store_path)?;

    let tokenizer = Tokenizer::from_config(config);
    let counter = KeywordCounter::new();
    let mut source = CsvTitleSource::open(file, field, config.has_headers)?;
    info!(target: "ckw::extract", file = %file.display(), field, "Reading titles");

    let stats = Extractor::new(&tokenizer)
        .with_progress_interval(config.progress_interval)
        .run(source.by_ref(), &counter)?;

    let new_keywords = store.merge(&counter);
    store.flush()?;
    info!(
        target: "ckw::extract",
        rows = source.rows_read(),
        skipped = source.skipped_rows(),
        store = %store.path().display(),
        "Run merged"
    );

    println!(
        "{}",
        format_extract_summary(
            &stats,
            source.skipped_rows(),
            new_keywords,
            store.len(),
            mode
        )
    );
    Ok(0)
}

fn run_export(store_path: &Path, mode: OutputMode) -> Result<i32> {
    let store = KeywordStore::open(store_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => writeln!(out, "{}", format_entries_json(&store.entries()))?,
        OutputMode::Human | OutputMode::Raw => {
            store.export_csv(&mut out)?;
        }
    }
    Ok(0)
}
