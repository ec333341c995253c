// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error type shared by the pool client, the session
// loop, configuration loading and pool lookup.
//
// Tree Location:
// - src/error.rs (crate error type)
// - Depends on: thiserror

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection closed by pool")]
    ConnectionClosed,

    #[error("pool lookup failed: {0}")]
    Lookup(#[from] reqwest::Error),

    #[error("pool lookup returned no usable pool")]
    LookupRejected,

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid pool address '{0}' (expected HOST:PORT)")]
    InvalidPoolAddress(String),
}

pub type Result<T> = std::result::Result<T, MinerError>;

// Changelog:
// - v1.0.0 (2026-10-17): Initial error type.
//   - Covers connection failures, pool lookup, config parsing and pool address parsing.
