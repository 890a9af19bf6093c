//! Baobab Advisor
//!
//! Command-line front end for the SME investment advisory engine.

use anyhow::Context;
use baobab_advisor::{
    catalog,
    config::Config,
    engine::AdvisorEngine,
    insights,
    monitor::{MarketMonitor, MarketQuote, MonitorConfig, ReplaySource},
    optimizer::{MonteCarloOptimizer, ReturnStatistics, WeightBounds},
    profiler,
    types::{RiskCategory, UserProfile},
};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "baobab-advisor")]
#[command(about = "Investment advisory engine for African SME opportunities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full advisory pipeline for a user profile
    Analyze {
        /// Path to a user profile JSON file
        profile: String,
    },
    /// Compute only the risk profile for a user
    Profile {
        /// Path to a user profile JSON file
        profile: String,
    },
    /// Show the model allocation for a risk category
    Allocate {
        /// Risk category (very_conservative .. aggressive)
        category: String,
    },
    /// Rank catalog opportunities for a risk category
    Opportunities {
        /// Risk category (very_conservative .. aggressive)
        category: String,
    },
    /// Optimize portfolio weights from a returns file
    Optimize {
        /// Path to an optimization request JSON file
        input: String,
        /// Fixed RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Poll a quotes file and print market snapshots
    Monitor {
        /// Path to a quotes JSON file to replay
        quotes: String,
        /// Poll once and exit instead of looping
        #[arg(long)]
        once: bool,
    },
}

/// Request body for the optimize command
#[derive(Debug, Deserialize)]
struct OptimizeRequest {
    /// Per-asset expected returns; defaults to historical means
    expected_returns: Option<BTreeMap<String, f64>>,
    historical_returns: BTreeMap<String, Vec<f64>>,
    min_weight: Option<f64>,
    max_weight: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Analyze { profile } => analyze(config, &profile),
        Commands::Profile { profile } => show_profile(&profile),
        Commands::Allocate { category } => allocate(&category),
        Commands::Opportunities { category } => opportunities(&category),
        Commands::Optimize { input, seed } => optimize(config, &input, seed),
        Commands::Monitor { quotes, once } => monitor(config, &quotes, once).await,
    }
}

fn read_user_profile(path: &str) -> anyhow::Result<UserProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile file {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing profile file {}", path))
}

fn parse_category(raw: &str) -> anyhow::Result<RiskCategory> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).map_err(|_| {
        anyhow::anyhow!(
            "unknown risk category '{}'; expected one of: very_conservative, \
             conservative, moderate, moderately_aggressive, aggressive",
            raw
        )
    })
}

fn analyze(config: Config, profile_path: &str) -> anyhow::Result<()> {
    let user = read_user_profile(profile_path)?;
    let engine = AdvisorEngine::with_reference_catalog();

    let mut analysis = engine.analyze(&user);
    analysis
        .opportunities
        .truncate(config.advisor.max_opportunities);

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn show_profile(profile_path: &str) -> anyhow::Result<()> {
    let user = read_user_profile(profile_path)?;
    let risk_profile = profiler::compute_risk_profile(&user);

    println!("{}", serde_json::to_string_pretty(&risk_profile)?);
    Ok(())
}

fn allocate(category_raw: &str) -> anyhow::Result<()> {
    let category = parse_category(category_raw)?;
    let allocation = baobab_advisor::allocation::model_allocation(category);

    println!("{}", serde_json::to_string_pretty(&allocation)?);
    Ok(())
}

fn opportunities(category_raw: &str) -> anyhow::Result<()> {
    let category = parse_category(category_raw)?;
    let ranked = catalog::rank_opportunities(category, &catalog::reference_catalog());

    if ranked.is_empty() {
        tracing::info!(category = %category, "no catalog entries match this category");
    }
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

fn optimize(config: Config, input_path: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input_path)
        .with_context(|| format!("reading optimization request {}", input_path))?;
    let request: OptimizeRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parsing optimization request {}", input_path))?;

    let stats = ReturnStatistics::from_history(&request.historical_returns)?;

    let mut mc_config = config.optimizer.to_monte_carlo();
    mc_config.bounds = WeightBounds {
        min: request.min_weight.unwrap_or(mc_config.bounds.min),
        max: request.max_weight.unwrap_or(mc_config.bounds.max),
    };

    let mut optimizer = MonteCarloOptimizer::new(stats, mc_config)?;
    if let Some(expected) = &request.expected_returns {
        optimizer = optimizer.with_expected_returns(expected)?;
    }

    let result = match seed.or(config.optimizer.seed) {
        Some(seed) => optimizer.optimize_seeded(seed)?,
        None => optimizer.optimize()?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    for note in insights::portfolio_commentary(&result) {
        println!("note: {}", note);
    }
    Ok(())
}

async fn monitor(config: Config, quotes_path: &str, once: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(quotes_path)
        .with_context(|| format!("reading quotes file {}", quotes_path))?;
    let quotes: Vec<MarketQuote> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing quotes file {}", quotes_path))?;

    let monitor = Arc::new(MarketMonitor::new(
        Arc::new(ReplaySource::new(quotes)),
        MonitorConfig {
            poll_interval: config.monitor.poll_interval(),
            ..Default::default()
        },
    ));

    if once {
        let count = monitor.poll_once().await?;
        println!("received {} quotes", count);
        return Ok(());
    }

    let mut rx = monitor.subscribe();
    tokio::spawn(monitor.run());

    while let Ok(snapshot) = rx.recv().await {
        for quote in &snapshot.quotes {
            println!(
                "{}  {}  {:+.2}%",
                quote.asset_id,
                quote.price,
                quote.change_24h * 100.0
            );
        }
    }
    Ok(())
}
