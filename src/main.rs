//! BagShop - transactional cost modelling
//!
//! Command-line front end for the cost breakdown and scenario projection
//! engines.
//!
//! ## Usage
//!
//! ```bash
//! # Cost breakdown for the reference data
//! bagshop breakdown
//!
//! # Cost breakdown from a config file, as JSON
//! bagshop breakdown -c bagshop.yaml --json
//!
//! # Pessimistic / base / optimistic projection
//! bagshop scenarios -c bagshop.yaml
//!
//! # Compare several parameter sets
//! bagshop compare base.yaml cheaper-courier.yaml more-online.yaml
//!
//! # Print a config file with every default filled in
//! bagshop init > bagshop.yaml
//! ```

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use bagshop_config::BagshopConfig;
use bagshop_core::{BagshopError, LogGuard, init_logging, logging};
use bagshop_cost::{CostBreakdown, compare_runs, project_with, total_breakdown};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::render::{ComparedRun, ComparisonReport, Report};

/// BagShop transactional cost model
///
/// Computes logistics, payment, marketing and staffing costs for an online
/// store and projects profit under pessimistic, base and optimistic scenarios.
#[derive(Parser, Debug)]
#[command(name = "bagshop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write JSON logs to ~/.bagshop/logs/
    #[arg(long, global = true)]
    log_to_file: bool,

    /// Directory for log files (implies --log-to-file)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cost breakdown for one parameter set
    Breakdown {
        /// Configuration file (defaults to the reference data)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Revenue and profit projection across scenarios
    Scenarios {
        /// Configuration file (defaults to the reference data)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare cost breakdowns from several configuration files
    Compare {
        /// Configuration files; the first one is the baseline
        #[arg(required = true)]
        configs: Vec<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as YAML
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(1);
        }
    };

    info!(file_logging = guard.has_file_output(), "bagshop starting");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("bagshop failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            if let Some(hint) = e.downcast_ref::<BagshopError>().and_then(|e| e.guidance()) {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::from(1)
        }
    }
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> bagshop_core::Result<LogGuard> {
    let log_dir = match (&cli.log_dir, cli.log_to_file) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(logging::default_log_dir()?),
        (None, false) => None,
    };
    init_logging(log_dir, cli.verbose > 0)
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Breakdown { config, json } => {
            let config = BagshopConfig::load_or_default(config.as_deref())?;
            let breakdown = total_breakdown(&config.params);
            info!(total = breakdown.total, "breakdown computed");

            if json {
                println!("{}", Report::new("breakdown", &breakdown).to_json()?);
            } else {
                print!("{}", render::breakdown_table(&breakdown));
            }
        }
        Command::Scenarios { config, json } => {
            let config = BagshopConfig::load_or_default(config.as_deref())?;
            let projection = &config.projection;
            let table = project_with(
                &projection.params,
                &projection.extra_items,
                &projection.scenarios,
            );
            info!(scenarios = table.len(), "scenarios projected");

            if json {
                println!("{}", Report::new("scenarios", &table).to_json()?);
            } else {
                print!("{}", render::scenario_table(&table));
            }
        }
        Command::Compare { configs, json } => {
            let report = compare_configs(&configs)?;
            info!(runs = report.runs.len(), best = report.comparison.best_index, "runs compared");

            if json {
                println!("{}", Report::new("compare", &report).to_json()?);
            } else {
                print!("{}", render::comparison_summary(&report));
            }
        }
        Command::Init => {
            print!("{}", BagshopConfig::default().to_yaml()?);
        }
    }
    Ok(())
}

/// Load every config and compare their breakdowns against the first.
fn compare_configs(paths: &[PathBuf]) -> anyhow::Result<ComparisonReport> {
    let mut runs = Vec::with_capacity(paths.len());
    for path in paths {
        let config = BagshopConfig::load(path)
            .with_context(|| format!("loading run {}", display_name(path)))?;
        runs.push(ComparedRun {
            source: display_name(path),
            breakdown: total_breakdown(&config.params),
            extra_items: config.params.extra_items,
        });
    }

    let totals: Vec<CostBreakdown> = runs.iter().map(|run| run.breakdown).collect();
    let comparison = compare_runs(&totals).context("no runs to compare")?;
    Ok(ComparisonReport { runs, comparison })
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
