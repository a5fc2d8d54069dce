//! tracenet: structural verifier and text reporter for elaborated netlists.
//!
//! Reads a serialized design, writes its report to the configured
//! destination, and summarizes the defects found on stderr. The exit code
//! is 0 for a clean design, 1 when defects were found, and 2 when the run
//! could not complete.

#![warn(missing_docs)]

mod pipeline;
mod report;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Exit code for a run that could not complete.
const EXIT_FATAL: i32 = 2;

/// tracenet: verify and report an elaborated netlist.
#[derive(Parser, Debug)]
#[command(name = "tracenet", version, about = "Netlist structure verifier")]
pub struct Cli {
    /// Serialized design (JSON) to inspect.
    pub design: PathBuf,

    /// Report destination; overrides `report.output` from the configuration.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a `tracenet.toml` configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored diagnostics; overrides `diagnostics.color`.
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Format of the run summary.
    #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// How the run summary is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Rendered diagnostics on stderr.
    Text,
    /// The summary as JSON on stdout.
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match report::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(EXIT_FATAL);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}
