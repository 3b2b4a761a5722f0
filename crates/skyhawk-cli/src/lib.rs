//! Batch entry point for the performance engine
//!
//! Reads one input record (or loading) from a JSON file and renders the
//! result record as JSON. The binary in `main.rs` only parses arguments,
//! installs logging and prints what [`run`] returns.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use skyhawk_core::balance::{compute_weight_and_balance, validate_loading, LoadingInput};
use skyhawk_core::config::EngineConfig;
use skyhawk_core::input::InputRecord;
use skyhawk_core::orchestrator::PerformanceCalculator;
use skyhawk_core::tables::PerformanceTables;
use skyhawk_core::validation::{validate_input, ValidationReport};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skyhawk", version, about = "Cessna 172N takeoff, cruise and landing performance")]
pub struct Cli {
    /// Log engine stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute takeoff, cruise, fuel and landing figures
    Performance(PerformanceArgs),
    /// Compute takeoff weight, moment and center of gravity
    Balance(BalanceArgs),
}

#[derive(Args, Debug)]
pub struct PerformanceArgs {
    /// Flat JSON input record
    #[arg(long)]
    pub input: PathBuf,

    /// Table set to use instead of the bundled C172N tables
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Engine constants overriding the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Compute even when inputs are outside the published ranges
    #[arg(long)]
    pub skip_validation: bool,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// JSON loading record
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub pretty: bool,
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `verbose`
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Execute a parsed command line and return the JSON to print
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Performance(args) => run_performance(args),
        Command::Balance(args) => run_balance(args),
    }
}

fn run_performance(args: &PerformanceArgs) -> Result<String> {
    let tables = match &args.tables {
        Some(path) => PerformanceTables::from_file(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => PerformanceTables::reference().context("loading bundled tables")?,
    };
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let content = read(&args.input)?;
    let input = InputRecord::from_json_str(&content)
        .with_context(|| format!("reading input record {}", args.input.display()))?;

    if args.skip_validation {
        tracing::debug!("input range checks skipped");
    } else {
        ensure_valid(&validate_input(&input), &args.input)?;
    }

    let result = PerformanceCalculator::with_config(&tables, config)
        .compute(&input)
        .context("performance computation failed")?;
    render(&result, args.pretty)
}

fn run_balance(args: &BalanceArgs) -> Result<String> {
    let content = read(&args.input)?;
    let loading: LoadingInput = serde_json::from_str(&content)
        .with_context(|| format!("reading loading {}", args.input.display()))?;
    ensure_valid(&validate_loading(&loading), &args.input)?;
    render(&compute_weight_and_balance(&loading), args.pretty)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn ensure_valid(report: &ValidationReport, path: &Path) -> Result<()> {
    if report.is_valid() {
        return Ok(());
    }
    let problems: Vec<String> = report.errors.iter().map(|e| format!("  - {e}")).collect();
    bail!("{} is out of range:\n{}", path.display(), problems.join("\n"))
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
