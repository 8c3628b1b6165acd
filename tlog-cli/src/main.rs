mod cli;
mod cli_modes;
mod report;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, chart_mode, entries_mode, path_mode, tags_mode};
use std::io;
use std::process::ExitCode;
use tlog_core::{Config, import_dir};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::new();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(CliModeResult::Finish) => ExitCode::SUCCESS,
        Ok(CliModeResult::Partial) if cli.strict => ExitCode::FAILURE,
        Ok(CliModeResult::Partial) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the JSON on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("TLOG_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<CliModeResult> {
    let config = Config::load();
    let log_dir = cli.dir.clone().unwrap_or(config.log_dir);
    let pretty = cli.pretty || config.pretty;

    if cli.path {
        path_mode(io::stdout().lock(), &log_dir)?;
        return Ok(CliModeResult::Finish);
    }

    // Bad filter arity is fatal, and is checked before touching any file.
    let filters = cli.filters()?;

    let result = import_dir(&log_dir);
    report::print_errors(io::stderr().lock(), &result.errors)?;
    let set = result.set.filter_all(&filters);
    tracing::debug!(
        imported = result.set.len(),
        selected = set.len(),
        "filtered entries"
    );

    let out = io::stdout().lock();
    if cli.by_tag {
        tags_mode(out, &set, pretty)?;
    } else if cli.chart {
        chart_mode(out, &set, pretty)?;
    } else {
        entries_mode(out, &set, pretty)?;
    }

    if result.is_complete() {
        Ok(CliModeResult::Finish)
    } else {
        Ok(CliModeResult::Partial)
    }
}
