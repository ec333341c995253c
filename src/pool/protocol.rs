// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/protocol.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the comma-separated line protocol spoken with the pool,
// located in the pool subdirectory. It builds job requests and share
// submissions and parses job lines.
//
// Tree Location:
// - src/pool/protocol.rs (line protocol)
// - Depends on: hex, log, thiserror, crate::core::types

use crate::core::types::{Job, SessionHandle, Solution};
use log::debug;
use thiserror::Error;

const LOG_TARGET: &str = "duco::miner::pool::protocol";

/// Software name reported in every share submission
pub const CLIENT_NAME: &str = "DucoRustMiner";

/// Why a job line was discarded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobLineError {
    #[error("expected 3 fields, got {0}")]
    FieldCount(usize),
    #[error("target is not hex: {0}")]
    TargetHex(String),
    #[error("difficulty is not an integer: {0}")]
    Difficulty(String),
}

/// Builds and parses lines of the pool protocol
pub struct LineProtocol;

impl LineProtocol {
    /// `JOB,<username>,<difficulty>[,<mining_key>]` with trailing newline
    pub fn job_request(username: &str, difficulty_label: &str, mining_key: Option<&str>) -> String {
        let line = match mining_key {
            Some(key) => format!("JOB,{},{},{}\n", username, difficulty_label, key),
            None => format!("JOB,{},{}\n", username, difficulty_label),
        };
        debug!(target: LOG_TARGET, "Job request: {}", line.trim_end());
        line
    }

    /// `<nonce>,<hashrate>,<client>,<rig>,<tag>` with trailing newline
    pub fn submission(solution: &Solution, hashrate: f64, rig_identifier: &str, handle: &SessionHandle) -> String {
        let line = format!(
            "{},{:.2},{},{},{}\n",
            solution.nonce, hashrate, CLIENT_NAME, rig_identifier, handle.shared_job_tag
        );
        debug!(target: LOG_TARGET, "Share submission: {}", line.trim_end());
        line
    }

    /// Parse `<base>,<target_hex>,<difficulty>` into a job with a decoded target.
    ///
    /// Trailing empty fields (`base,hex,1,`) are ignored.
    pub fn parse_job(line: &str) -> Result<Job, JobLineError> {
        let mut fields: Vec<&str> = line.trim().split(',').collect();
        while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.len() != 3 {
            return Err(JobLineError::FieldCount(fields.len()));
        }

        let target = hex::decode(fields[1].trim())
            .map_err(|_| JobLineError::TargetHex(fields[1].to_string()))?;
        let difficulty = fields[2]
            .trim()
            .parse::<u64>()
            .map_err(|_| JobLineError::Difficulty(fields[2].to_string()))?;

        Ok(Job { base: fields[0].to_string(), target, difficulty })
    }
}


// Changelog:
// - v1.0.1 (2026-10-17): Job lines with trailing empty fields are accepted.
// - v1.0.0 (2026-10-17): Comma-separated line protocol.
//   - Replaced JSON Stratum login/submit builders with job request, share submission and job line parsing.
