//! ronda CLI binary.
//!
//! Command-line interface for the ronda stock-selection engine: signal
//! discovery, scoring, screening, and a full rebalance against CSV market
//! data.

mod data;
mod optimizer;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ronda_rebalance::{record_metrics, pipeline, Rebalancer, StrategyConfig};
use ronda_screen::Normalizer;
use ronda_signals::registry::{signals_by_category, SignalCategory};
use ronda_signals::library;
use ronda_traits::{MarketData, StaticUniverse};

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Daily cross-sectional stock-selection engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available signals
    Signals {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show one signal's scores across the file's symbols
    Score {
        /// Signal name
        signal: String,

        /// CSV file with symbol/date/close and fundamental columns
        #[arg(short, long)]
        data: PathBuf,

        /// Evaluation date (YYYY-MM-DD, defaults to latest in the data)
        #[arg(long)]
        date: Option<String>,

        /// Show raw values instead of winsorized z-scores
        #[arg(long)]
        raw: bool,
    },

    /// Show the eligible set after the quality screen
    Screen {
        /// CSV file with symbol/date/close and fundamental columns
        #[arg(short, long)]
        data: PathBuf,

        /// Evaluation date (YYYY-MM-DD, defaults to latest in the data)
        #[arg(long)]
        date: Option<String>,

        /// Target total position count
        #[arg(short, long, default_value = "10")]
        positions: usize,
    },

    /// Run a full rebalance with the built-in stand-in optimizer
    Rebalance {
        /// CSV file with symbol/date/close and fundamental columns
        #[arg(short, long)]
        data: PathBuf,

        /// Evaluation date (YYYY-MM-DD, defaults to latest in the data)
        #[arg(long)]
        date: Option<String>,

        /// Target total position count
        #[arg(short, long, default_value = "10")]
        positions: usize,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Signals { category, verbose } => list_signals(category, verbose),
        Commands::Score {
            signal,
            data,
            date,
            raw,
        } => show_scores(&signal, &data, date, raw),
        Commands::Screen {
            data,
            date,
            positions,
        } => show_screen(&data, date, positions),
        Commands::Rebalance {
            data,
            date,
            positions,
            format,
        } => run_rebalance(&data, date, positions, &format),
    }
}

fn list_signals(category: Option<String>, verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Signals                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = [
        (SignalCategory::Momentum, "Momentum"),
        (SignalCategory::Value, "Value"),
        (SignalCategory::Quality, "Quality"),
        (SignalCategory::Growth, "Growth"),
    ];

    for (cat, cat_name) in categories {
        if let Some(ref filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        let cat_signals = signals_by_category(&cat);
        if cat_signals.is_empty() {
            continue;
        }

        println!("{}:", cat_name);
        println!("{}", "-".repeat(60));

        for info in cat_signals {
            if verbose {
                println!(
                    "  {:20} - {} (lookback: {} days)",
                    info.name, info.description, info.lookback
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed signal descriptions.\n");
    }

    println!("Signal aliases:");
    println!("  mom_1m, momentum_short  -> momentum_1m");
    println!("  mom_3m, momentum_long   -> momentum_3m");
    println!("  pe, peg, income_growth  -> pe_ratio, peg_ratio, net_income_growth");
    println!();

    Ok(())
}

fn resolve_date(data: &MarketData, date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(ref d) => Ok(data::parse_date(d)?),
        None => Ok(data::latest_date(data)?),
    }
}

fn show_scores(signal_name: &str, path: &Path, date: Option<String>, raw: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Signal Scores                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let Some(signal) = library::by_name(signal_name) else {
        println!(
            "Unknown signal: '{}'. Use 'ronda signals' to list available signals.",
            signal_name
        );
        return Ok(());
    };

    let market_data = data::load_market_data(path)?;
    let as_of = resolve_date(&market_data, date)?;

    println!("Signal: {}", signal.name());
    println!("Date:   {}", as_of);
    println!(
        "Loaded {} rows across {} columns",
        market_data.len(),
        market_data.columns().len()
    );
    println!();

    let scores = signal.compute(&market_data, as_of)?;
    let scores = if raw {
        scores
    } else {
        Normalizer::default().normalize(&scores)
    };

    if scores.is_empty() {
        println!("No symbol has sufficient data for this signal.");
        println!(
            "The {} signal requires {} trading days of history.",
            signal.name(),
            signal.lookback()
        );
        return Ok(());
    }

    println!("{:<10} {:>12}", "Symbol", "Score");
    println!("{}", "─".repeat(24));
    for (symbol, value) in scores.iter() {
        println!("{:<10} {:>12.4}", symbol, value);
    }
    println!();
    if !raw {
        println!("Scores are winsorized and cross-sectionally z-scored (mean=0, std=1)");
    }
    println!();

    Ok(())
}

fn show_screen(path: &Path, date: Option<String>, positions: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Quality Screen                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let market_data = data::load_market_data(path)?;
    let as_of = resolve_date(&market_data, date)?;
    let universe = StaticUniverse::new(market_data.symbols()?);
    let config = StrategyConfig {
        total_positions: positions,
        ..Default::default()
    };

    println!("Date:     {}", as_of);
    println!("Universe: {} symbols", universe.len());
    println!(
        "Band:     [{}, {}] percentile of the quality composite",
        config.quality_band.lo, config.quality_band.hi
    );
    println!();

    let output = pipeline::run(&market_data, &universe, &config, as_of)?;

    println!("{:<10} {:>12} {:>8} {:>8}", "Symbol", "Quality", "Long", "Short");
    println!("{}", "─".repeat(42));
    for symbol in &output.eligible {
        let quality = output.quality.get(symbol).unwrap_or(f64::NAN);
        println!(
            "{:<10} {:>12.4} {:>8} {:>8}",
            symbol,
            quality,
            if output.picks.longs.contains(symbol) { "*" } else { "" },
            if output.picks.shorts.contains(symbol) { "*" } else { "" },
        );
    }
    println!();
    println!(
        "{} eligible, {} long, {} short",
        output.eligible.len(),
        output.picks.longs.len(),
        output.picks.shorts.len()
    );
    println!();

    Ok(())
}

fn run_rebalance(
    path: &Path,
    date: Option<String>,
    positions: usize,
    format: &str,
) -> Result<()> {
    if format == "text" {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                       Rebalance                              ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
    }

    let market_data = data::load_market_data(path)?;
    let as_of = resolve_date(&market_data, date)?;
    let universe = StaticUniverse::new(market_data.symbols()?);
    let config = StrategyConfig {
        total_positions: positions,
        ..Default::default()
    };

    let rebalancer = Rebalancer::new(config, Box::new(optimizer::ProportionalOptimizer))?;
    let report = rebalancer.rebalance(&market_data, &universe, as_of)?;
    let record = record_metrics(as_of, &report.weights);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Date:     {}", as_of);
    println!("Universe: {} symbols", universe.len());
    println!(
        "Eligible: {} -> {} long / {} short",
        report.pipeline.eligible.len(),
        report.pipeline.picks.longs.len(),
        report.pipeline.picks.shorts.len()
    );
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("TARGET WEIGHTS (as of {})", as_of);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("{:<10} {:>12} {:>12}", "Symbol", "Alpha", "Weight");
    println!("{}", "─".repeat(36));
    for (symbol, weight) in report.weights.iter() {
        let alpha = report.request.alpha.get(symbol).unwrap_or(f64::NAN);
        println!("{:<10} {:>12.4} {:>12.4}", symbol, alpha, weight);
    }
    println!();
    println!(
        "Positions: {}   Gross leverage: {:.2}",
        record.positions, record.leverage
    );
    println!();
    println!("Weights come from the built-in stand-in optimizer; production");
    println!("deployments inject a real constrained solver.");
    println!();

    Ok(())
}
