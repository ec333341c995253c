// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the DUCO miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: config, core, error, miner, pool, utils

pub mod config;
pub mod core;
pub mod error;
pub mod miner;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::config::MinerConfig;
pub use crate::core::{HashSolver, Job, Solution};
pub use crate::error::{MinerError, Result};
pub use crate::miner::{PoolSession, StatsRegistry, Supervisor};
pub use crate::pool::{Feedback, PoolClient, PoolEndpoint};

// Changelog:
// - v1.1.0 (2026-10-17): Line-protocol pool miner.
//   - Added config and error modules; removed benchmark, help and TUI exports.
//   - Result now uses MinerError instead of a boxed error.
// - v1.0.0 (2025-06-14): Initial modular breakout from monolithic main.rs.
