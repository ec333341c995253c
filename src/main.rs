// DUCO Miner - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 3.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Process entry point: load settings, pick a pool, run the workers.

use clap::Parser;
use duco_miner::{
    config::MinerConfig,
    core::types::Args,
    miner::Supervisor,
    pool::{PoolEndpoint, lookup},
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MinerConfig::load(&args.config).apply_args(&args);

    let endpoint = match &args.pool {
        Some(address) => match PoolEndpoint::parse(address) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                eprintln!("❌ Error: {}", err);
                std::process::exit(1);
            }
        },
        None => lookup::fetch_pool().await,
    };

    info!("🌐 Pool: {}", endpoint);
    info!("👤 Username: {}", config.username);
    info!("🏷️ Rig: {}", config.rig_identifier);
    info!("🎯 Difficulty: {}", config.difficulty);
    info!("🧵 Workers: {}", config.worker_count());

    Supervisor::new(&config, endpoint)
        .with_report_interval(Duration::from_secs(args.report_interval))
        .run()
        .await;
}

// Changelog:
// - v3.0.0 (2026-10-17): Line-protocol pool miner entry point.
//   - Replaced feature-gated CPU/GPU/hybrid mains with a single supervisor launch.
//   - Settings come from config.yml with CLI overrides; pool from --pool or the pool lookup.
