// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the pool communication functionality
// of the DUCO miner, located in the pool subdirectory. It declares submodules
// and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, lookup, messages, protocol

pub mod client;
pub mod lookup;
pub mod messages;
pub mod protocol;

// Re-export key types for convenience
pub use client::{PoolClient, PoolConnection};
pub use lookup::PoolEndpoint;
pub use messages::Feedback;
pub use protocol::LineProtocol;

// Changelog:
// - v1.1.0 (2026-10-17): Added lookup submodule and line protocol re-exports.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
