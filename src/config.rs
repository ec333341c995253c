// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/config.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file loads the miner settings from config.yml, located at the root of
// the source tree. A missing or unreadable file yields the built-in defaults,
// and command-line flags override whatever the file provides.
//
// Tree Location:
// - src/config.rs (miner configuration)
// - Depends on: serde, serde_yaml, num_cpus

use crate::core::types::Args;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_USERNAME: &str = "your_username_here";
pub const DEFAULT_RIG_IDENTIFIER: &str = "TermuxMiner";
pub const DEFAULT_DIFFICULTY: &str = "LOW";
pub const DEFAULT_THREAD_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    pub username: String,
    /// Sent as a fourth job-request field only when present
    pub mining_key: Option<String>,
    pub rig_identifier: String,
    /// Difficulty label requested from the pool
    pub difficulty: String,
    /// 0 = one worker per CPU
    pub thread_count: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            mining_key: None,
            rig_identifier: DEFAULT_RIG_IDENTIFIER.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            thread_count: DEFAULT_THREAD_COUNT,
        }
    }
}

impl MinerConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: MinerConfig = serde_yaml::from_str(content)?;
        Ok(config.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Read `path`, substituting defaults if it cannot be read or parsed
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                info!("📄 Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("⚠️ Could not read {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(username) = &args.username {
            self.username = username.clone();
        }
        if let Some(key) = &args.mining_key {
            self.mining_key = Some(key.clone());
        }
        if let Some(rig) = &args.rig_identifier {
            self.rig_identifier = rig.clone();
        }
        if let Some(difficulty) = &args.difficulty {
            self.difficulty = difficulty.clone();
        }
        if let Some(threads) = args.threads {
            self.thread_count = threads;
        }
        self.normalized()
    }

    /// Number of workers to spawn, resolving 0 to the CPU count
    pub fn worker_count(&self) -> usize {
        if self.thread_count == 0 { num_cpus::get() } else { self.thread_count }
    }

    // A blank value in YAML (`rig_identifier:` or `mining_key: ""`) counts as absent.
    fn normalized(mut self) -> Self {
        if self.mining_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            self.mining_key = None;
        }
        for (field, default) in [
            (&mut self.username, DEFAULT_USERNAME),
            (&mut self.rig_identifier, DEFAULT_RIG_IDENTIFIER),
            (&mut self.difficulty, DEFAULT_DIFFICULTY),
        ] {
            if field.trim().is_empty() {
                *field = default.to_string();
            }
        }
        self
    }
}


// Changelog:
// - v1.0.1 (2026-10-17): Blank username, rig identifier and difficulty fall back to defaults.
// - v1.0.0 (2026-10-17): YAML configuration with defaults and CLI overrides.
