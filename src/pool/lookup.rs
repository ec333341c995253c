// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/lookup.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file resolves which pool to mine against, located in the pool
// subdirectory. It asks the pool directory over HTTP and falls back to a fixed
// server on any failure.
//
// Tree Location:
// - src/pool/lookup.rs (pool discovery)
// - Depends on: reqwest, serde

use crate::error::{MinerError, Result};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

pub const POOL_LOOKUP_URL: &str = "https://server.duinocoin.com/getPool";
pub const FALLBACK_HOST: &str = "server.duinocoin.com";
pub const FALLBACK_PORT: u16 = 2813;
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Host and port of a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEndpoint {
    pub host: String,
    pub port: u16,
}

impl PoolEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_HOST, FALLBACK_PORT)
    }

    /// Parse `HOST:PORT`
    pub fn parse(address: &str) -> Result<Self> {
        let (host, port) = address
            .rsplit_once(':')
            .ok_or_else(|| MinerError::InvalidPoolAddress(address.to_string()))?;
        if host.is_empty() {
            return Err(MinerError::InvalidPoolAddress(address.to_string()));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| MinerError::InvalidPoolAddress(address.to_string()))?;
        Ok(Self::new(host, port))
    }
}

impl fmt::Display for PoolEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Body returned by the pool directory
#[derive(Debug, Deserialize)]
pub struct PoolLookupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PoolLookupResponse {
    pub fn into_endpoint(self) -> Result<PoolEndpoint> {
        match (self.success, self.ip, self.port) {
            (true, Some(ip), Some(port)) if !ip.is_empty() => Ok(PoolEndpoint::new(ip, port)),
            _ => Err(MinerError::LookupRejected),
        }
    }
}

async fn query_pool(url: &str) -> Result<PoolEndpoint> {
    let client = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
    let response: PoolLookupResponse = client.get(url).send().await?.error_for_status()?.json().await?;
    if let Some(name) = &response.name {
        info!("🌐 Pool directory suggested {}", name);
    }
    response.into_endpoint()
}

/// Ask the pool directory at `url`, falling back to the fixed pool on any failure
pub async fn fetch_pool_from(url: &str) -> PoolEndpoint {
    match query_pool(url).await {
        Ok(endpoint) => endpoint,
        Err(e) => {
            warn!("⚠️ Pool lookup failed: {}. Using fallback {}:{}", e, FALLBACK_HOST, FALLBACK_PORT);
            PoolEndpoint::fallback()
        }
    }
}

pub async fn fetch_pool() -> PoolEndpoint {
    fetch_pool_from(POOL_LOOKUP_URL).await
}


// Changelog:
// - v1.0.0 (2026-10-17): Pool directory lookup with fixed fallback.
