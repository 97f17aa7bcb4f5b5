//! # CLI Layer
//!
//! One possible client of the nsmeta library. This is the only code that:
//! - parses process arguments (clap, `setup.rs`)
//! - writes to stdout (`render.rs`)
//! - decides the exit code
//!
//! Every failure from resolution, loading, lookup or validation reaches
//! [`run`] unchanged and is printed as `{"error": "..."}` with exit code 1.
//! Logging goes to stderr and is off unless `--verbose` or `RUST_LOG` is set.

mod render;
mod setup;

use clap::Parser;
use nsmeta::api::{CmdResult, MetadataApi};
use nsmeta::config::MetadataConfig;
use nsmeta::error::Result;
use nsmeta::store::fs::FileStore;
use nsmeta::store::MetadataStore;
use render::{clap_error_message, render_error, render_result};
use setup::{print_usage, Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let config = MetadataConfig::resolve(cli.metadata_dir);
    tracing::debug!(base_dir = %config.base_dir().display(), "metadata store");
    let api = MetadataApi::new(FileStore::new(config), cli.env);

    let rendered = dispatch(&api, command)
        .and_then(|result| render_result(&result).map_err(|e| e.to_string()));
    match rendered {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(message) => {
            println!("{}", render_error(&message));
            ExitCode::FAILURE
        }
    }
}

fn dispatch<S: MetadataStore>(
    api: &MetadataApi<S>,
    command: Commands,
) -> std::result::Result<CmdResult, String> {
    let result: Result<CmdResult> = match command {
        Commands::ListRecords => api.list_records(),
        Commands::GetRecord { record_key } => api.get_record(&record_key),
        Commands::ListFields { record_key } => api.list_fields(&record_key),
        Commands::FindField { field_id } => api.find_field(&field_id),
        Commands::SuggestSuiteql { record_key, fields } => {
            api.suggest_suiteql(&record_key, &fields)
        }
    };
    result.map_err(|e| {
        tracing::debug!(kind = ?e.kind(), "command failed");
        e.to_string()
    })
}

fn handle_parse_error(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{}", render_error(&clap_error_message(&err)));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("nsmeta=debug"),
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
