// In app/src/main.rs

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use core_types::Trade;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Ledger aggregation & risk reports for executed F&O trades.")]
struct Cli {
    /// Path to a JSON array of executed trades.
    #[arg(short, long, global = true, default_value = "trades.json")]
    trades: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Builds the daily ledger with charges, equity curve and drawdown.
    Ledger,

    /// Reconciles realized positions per symbol.
    Positions,

    /// Attributes net PnL to strategy labels with proportional charges.
    StrategyPnl,

    /// Per-strategy trade quality: counts, win rate and average risk-reward.
    StrategyAnalytics,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let settings = app_config::load_settings().context("failed to load configuration")?;
    let registry = settings.lot_registry()?;
    let rates = settings.charge_rates();

    let trades = load_trades(&cli.trades)?;
    info!(count = trades.len(), path = %cli.trades.display(), "loaded trade snapshot");

    let report = match cli.command {
        Commands::Ledger => {
            let report = ledger::build_ledger(&trades, settings.account.capital, &registry, &rates)?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Positions => {
            let summaries = positions::reconcile_positions(&trades, &registry);
            serde_json::to_string_pretty(&summaries)?
        }
        Commands::StrategyPnl => {
            let allocations = allocation::allocate_by_strategy(&trades, &registry, &rates);
            for insight in allocation::generate_insights(&allocations) {
                info!("{insight}");
            }
            serde_json::to_string_pretty(&allocations)?
        }
        Commands::StrategyAnalytics => {
            let analytics = allocation::strategy_analytics(&trades, &registry);
            serde_json::to_string_pretty(&analytics)?
        }
    };

    println!("{report}");
    Ok(())
}

fn load_trades(path: &PathBuf) -> Result<Vec<Trade>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open trade snapshot {}", path.display()))?;
    let trades = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse trade snapshot {}", path.display()))?;
    Ok(trades)
}
