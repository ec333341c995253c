// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the DUCO
// miner, located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod solver;
pub mod types;

// Re-export the most commonly used items
pub use solver::{attempt_bound, sha1_with_nonce, HashSolver};
pub use types::{Args, Job, SessionHandle, ShareKind, Solution};

// Changelog:
// - v1.0.0 (2026-10-17): Swapped sha3x/sha256/difficulty modules for the SHA-1 solver.
