//! siteflow library root.
//! Exposes the analytics engine (metrics + flow), the value objects it reads,
//! and the CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::calculator::{
    ActivityMetrics, FlowBlock, FlowStatus, Severity, analyze_flow, compute_metrics,
};
pub use crate::models::{Activity, ClockTime, SubStep, WorkerAssignment, WorkerRole};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Metrics { .. } => cli::commands::metrics::handle(&cli.command, cfg),
        Commands::Flow { .. } => cli::commands::flow::handle(&cli.command, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Normalize { .. } => cli::commands::normalize::handle(&cli.command, cfg),
        Commands::Narrative { .. } => cli::commands::narrative::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ command-line overrides
    if cli.no_color {
        cfg.color = false;
    }
    cfg.interval_override = cli.interval;

    // 4️⃣ diagnostics to stderr
    utils::logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
