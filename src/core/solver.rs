// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/solver.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the bounded brute-force nonce search, located in the
// core subdirectory. Candidates are the SHA-1 digest of the job base followed
// by the decimal nonce, compared byte-for-byte with the job target.
//
// Tree Location:
// - src/core/solver.rs (nonce search)
// - Depends on: sha1

use crate::core::types::{Job, Solution};
use sha1::{Digest, Sha1};
use std::fmt::Write as _;
use std::time::Instant;

/// Number of candidates tried per unit of difficulty
pub const ATTEMPTS_PER_DIFFICULTY: u64 = 100;

/// Highest nonce examined for a difficulty (inclusive)
pub fn attempt_bound(difficulty: u64) -> u64 {
    difficulty.saturating_mul(ATTEMPTS_PER_DIFFICULTY)
}

/// SHA-1 digest of `base` followed by the decimal form of `nonce`
pub fn sha1_with_nonce(base: &str, nonce: u64) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(base.as_bytes());
    hasher.update(nonce.to_string().as_bytes());
    hasher.finalize().into()
}

pub struct HashSolver;

impl HashSolver {
    /// Search nonces `0..=difficulty * 100` for one whose digest equals `target`.
    ///
    /// Returns `None` when the range is exhausted; that is a normal outcome.
    pub fn solve(base: &str, target: &[u8], difficulty: u64) -> Option<Solution> {
        let start = Instant::now();

        // Reuse one hasher primed with the base; only the nonce digits change.
        let mut primed = Sha1::new();
        primed.update(base.as_bytes());

        let mut digits = String::with_capacity(20);
        for nonce in 0..=attempt_bound(difficulty) {
            digits.clear();
            let _ = write!(digits, "{}", nonce);

            let mut hasher = primed.clone();
            hasher.update(digits.as_bytes());
            if hasher.finalize().as_slice() == target {
                return Some(Solution { nonce, elapsed: start.elapsed() });
            }
        }
        None
    }

    pub fn solve_job(job: &Job) -> Option<Solution> {
        Self::solve(&job.base, &job.target, job.difficulty)
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Initial SHA-1 nonce search.
//   - Replaces the SHA3x batch hasher; single sequential search bounded by difficulty * 100.
