//! PaperLab CLI — batch strategy backtests from the command line.
//!
//! Commands:
//! - `run` — test every configured strategy against a symbol basket and
//!   print the sorted results table, optionally exporting CSV/JSON

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use paperlab_core::data::YahooProvider;
use paperlab_core::strategy::StrategyKind;
use paperlab_runner::{
    export_csv, export_json, render_table, run_batch, BatchConfig, StdoutProgress,
};

#[derive(Parser)]
#[command(
    name = "paperlab",
    about = "PaperLab CLI — walk-forward strategy backtesting over a symbol basket"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every strategy over a symbol basket and print the results table.
    Run {
        /// Path to a TOML batch config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Symbols to test (e.g., AKBNK.IS GARAN.IS). Mutually exclusive with --config.
        #[arg(long, num_args = 1..)]
        symbols: Vec<String>,

        /// Strategy to run (repeatable): classifier, rsi_threshold. Defaults to all.
        #[arg(long)]
        strategy: Vec<String>,

        /// Lookback window in days.
        #[arg(long, default_value_t = 60)]
        lookback: usize,

        /// Starting paper-trading balance.
        #[arg(long, default_value_t = 100_000.0)]
        balance: f64,

        /// Write the results table to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the results table to this JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            symbols,
            strategy,
            lookback,
            balance,
            csv,
            json,
        } => run_cmd(config, symbols, strategy, lookback, balance, csv, json),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    config_path: Option<PathBuf>,
    symbols: Vec<String>,
    strategy_names: Vec<String>,
    lookback: usize,
    balance: f64,
    csv_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
) -> Result<()> {
    // Validate mutually exclusive options
    if config_path.is_some() && !symbols.is_empty() {
        bail!("--config and --symbols are mutually exclusive");
    }
    if config_path.is_none() && symbols.is_empty() {
        bail!("one of --config or --symbols is required");
    }

    let config = if let Some(path) = config_path {
        let mut config = BatchConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        if !strategy_names.is_empty() {
            config.strategies = parse_strategies(&strategy_names)?;
        }
        config
    } else {
        let strategies = if strategy_names.is_empty() {
            StrategyKind::all().to_vec()
        } else {
            parse_strategies(&strategy_names)?
        };
        BatchConfig {
            symbols,
            strategies,
            lookback_days: lookback,
            starting_balance: balance,
        }
    };

    let provider = YahooProvider::new();
    let rows = run_batch(&provider, &config, &StdoutProgress);

    println!();
    print!("{}", render_table(&rows));

    if let Some(path) = csv_path {
        std::fs::write(&path, export_csv(&rows)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("CSV written to: {}", path.display());
    }

    if let Some(path) = json_path {
        std::fs::write(&path, export_json(&rows)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("JSON written to: {}", path.display());
    }

    Ok(())
}

fn parse_strategies(names: &[String]) -> Result<Vec<StrategyKind>> {
    names
        .iter()
        .map(|name| name.parse::<StrategyKind>().map_err(anyhow::Error::msg))
        .collect()
}
