// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the statistics tracking functionality
// of the DUCO miner, located in the stats subdirectory of the miner module. It
// declares submodules and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: registry, reporter

pub mod registry;
pub mod reporter;

// Re-export key types for convenience
pub use registry::{HashrateSlot, StatsRegistry, StatsSnapshot};
pub use reporter::Reporter;

// Changelog:
// - v1.1.0 (2026-10-17): Replaced miner_stats/thread_stats/gpu_info with registry and reporter.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
