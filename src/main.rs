use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use levelscope_logs::LogStore;
use levelscope_report::Reporter;

mod config;
mod error;
mod input;
mod pipeline;

use config::Config;
use error::InputError;
use pipeline::{Outcome, write_report};

/// Levelscope - count log lines per level and list the lines of one level
#[derive(Parser, Debug)]
#[command(name = "levelscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a `.log` file
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Level to show details for (case-insensitive, optional)
    #[arg(value_name = "LEVEL")]
    level: Option<String>,

    /// TOML file with report settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr, the report to stdout
    let default_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(Outcome::Reported) => ExitCode::SUCCESS,
        Ok(Outcome::NoLogs) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let (config, lines) = load_inputs(&args.path, args.config.as_deref())?;
    let store = LogStore::build(&lines);
    info!(
        path = %args.path.display(),
        lines = lines.len(),
        records = store.len(),
        "parsed log file"
    );

    let reporter = Reporter::new(config.report);
    let mut stdout = io::stdout().lock();
    let outcome = write_report(&mut stdout, &store, args.level.as_deref(), &reporter)
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(outcome)
}

/// Check the log path first, then load config, then read the log lines
fn load_inputs(path: &Path, config: Option<&Path>) -> Result<(Config, Vec<String>), InputError> {
    input::validate(path)?;
    let config = Config::load(config)?;
    let lines = input::read_lines(path)?;
    Ok((config, lines))
}
