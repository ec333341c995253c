// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the miner functionality of the DUCO
// miner, located in the miner subdirectory. It declares submodules and re-exports
// key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: session, stats, supervisor

pub mod session;
pub mod stats;
pub mod supervisor;

// Re-export key types for convenience
pub use session::{PoolSession, SessionSettings};
pub use stats::{Reporter, StatsRegistry};
pub use supervisor::Supervisor;

// Changelog:
// - v1.2.0 (2026-10-17): Replaced cpu/gpu miners with per-worker pool sessions and a supervisor.
// - v1.1.0 (2025-06-24): Added GPU mining module.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
