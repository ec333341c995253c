// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the DUCO miner, located in the
// core subdirectory. It includes types for command-line arguments, pool jobs,
// solutions, per-worker identity and share classification.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Floor applied to a zero elapsed time before deriving hashrate
pub const MIN_ELAPSED_SECS: f64 = 0.001;

/// Command-line arguments for the DUCO miner
///
/// Every mining field is optional here; anything left unset falls back to the
/// value from the config file, then to the built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(
    name = "duco-miner",
    version,
    about = "Multi-worker SHA-1 line-protocol pool miner",
    long_about = "DUCO Miner runs several independent pool sessions, each requesting jobs,\n\
                  searching for the nonce whose SHA-1 digest matches the job target and\n\
                  submitting it with the measured hashrate.\n\n\
                  Settings are read from config.yml and may be overridden on the command line.\n\n\
                  Examples:\n\
                    duco-miner --username alice --threads 4\n\
                    duco-miner --config rig.yml --pool 127.0.0.1:2813"
)]
pub struct Args {
    /// YAML configuration file
    #[arg(short, long, default_value = "config.yml", value_name = "PATH")]
    pub config: PathBuf,

    /// Pool account name
    #[arg(short = 'u', long, value_name = "NAME")]
    pub username: Option<String>,

    /// Optional mining key sent with every job request
    #[arg(short = 'k', long, value_name = "KEY")]
    pub mining_key: Option<String>,

    /// Rig identifier reported with every share
    #[arg(short, long = "rig", value_name = "NAME")]
    pub rig_identifier: Option<String>,

    /// Difficulty label requested from the pool (e.g. LOW, MEDIUM)
    #[arg(short, long, value_name = "LABEL")]
    pub difficulty: Option<String>,

    /// Number of pool workers (0 = one per CPU)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Pool address; skips the pool lookup when set
    #[arg(short = 'o', long, value_name = "HOST:PORT")]
    pub pool: Option<String>,

    /// Seconds between aggregate statistics reports
    #[arg(long, default_value = "60", value_name = "SECONDS")]
    pub report_interval: u64,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.report_interval == 0 {
            return Err("Report interval must be greater than 0 seconds".to_string());
        }
        if let Some(threads) = self.threads {
            if threads > 1024 {
                return Err("Thread count cannot exceed 1024".to_string());
            }
        }
        Ok(())
    }
}

/// One unit of work issued by the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Prefix every candidate nonce is appended to
    pub base: String,

    /// Decoded target digest
    pub target: Vec<u8>,

    /// Bounds the search to `difficulty * 100 + 1` candidates
    pub difficulty: u64,
}

/// A nonce matching the job target together with the time spent finding it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub nonce: u64,
    pub elapsed: Duration,
}

impl Solution {
    /// Elapsed search time in seconds at microsecond resolution, never zero
    pub fn elapsed_secs(&self) -> f64 {
        let secs = self.elapsed.as_micros() as f64 / 1_000_000.0;
        if secs == 0.0 { MIN_ELAPSED_SECS } else { secs }
    }

    /// Candidates examined per second; nonce 0 counts as one attempt
    pub fn hashrate(&self) -> f64 {
        (self.nonce as f64 + 1.0) / self.elapsed_secs()
    }
}

/// Counter a classified share increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    Good,
    Bad,
    Block,
}

/// Per-worker identity, fixed for the lifetime of the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    pub worker_id: usize,
    /// Random tag shared by every worker of this process
    pub shared_job_tag: u32,
}

impl SessionHandle {
    pub fn new(worker_id: usize, shared_job_tag: u32) -> Self {
        Self { worker_id, shared_job_tag }
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Line-protocol pool types.
//   - Replaced SHA3x pool/mining job types with Job, Solution, ShareKind and SessionHandle.
//   - Args now carries config path and per-field overrides instead of wallet/benchmark/SV2 flags.
