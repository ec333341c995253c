// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/registry.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements miner-wide statistics shared by every pool session and
// the reporter, located in the stats subdirectory of the miner module. It
// tracks share counters and the latest hashrate of each worker.
//
// Tree Location:
// - src/miner/stats/registry.rs (shared statistics)
// - Depends on: std, tracing

use crate::core::types::ShareKind;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Latest hashrate of one worker, stored as `f64` bits so a read never sees a torn value
#[derive(Debug, Default)]
pub struct HashrateSlot(AtomicU64);

impl HashrateSlot {
    pub fn set(&self, hashrate: f64) {
        self.0.store(hashrate.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// Point-in-time copy of the registry for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub accepted: u64,
    pub rejected: u64,
    pub blocks: u64,
    pub hashrates: Vec<f64>,
}

impl StatsSnapshot {
    pub fn total_hashrate(&self) -> f64 {
        self.hashrates.iter().sum()
    }

    pub fn total_shares(&self) -> u64 {
        self.accepted + self.rejected
    }
}

#[derive(Debug)]
pub struct StatsRegistry {
    accepted: AtomicU64,
    rejected: AtomicU64,
    blocks: AtomicU64,
    hashrates: Box<[HashrateSlot]>,
}

impl StatsRegistry {
    pub fn new(num_workers: usize) -> Self {
        Self {
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            blocks: AtomicU64::new(0),
            hashrates: (0..num_workers).map(|_| HashrateSlot::default()).collect(),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.hashrates.len()
    }

    /// Count one classified share; returns the new value of that counter
    pub fn record(&self, kind: ShareKind) -> u64 {
        let counter = match kind {
            ShareKind::Good => &self.accepted,
            ShareKind::Bad => &self.rejected,
            ShareKind::Block => &self.blocks,
        };
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Overwrite the hashrate slot of `worker_id` with its latest measurement
    pub fn set_hashrate(&self, worker_id: usize, hashrate: f64) {
        match self.hashrates.get(worker_id) {
            Some(slot) => slot.set(hashrate),
            None => warn!("Ignoring hashrate for unknown worker {} ({} slots)", worker_id, self.hashrates.len()),
        }
    }

    pub fn hashrate(&self, worker_id: usize) -> Option<f64> {
        self.hashrates.get(worker_id).map(HashrateSlot::get)
    }

    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn blocks(&self) -> u64 {
        self.blocks.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            accepted: self.accepted(),
            rejected: self.rejected(),
            blocks: self.blocks(),
            hashrates: self.hashrates.iter().map(HashrateSlot::get).collect(),
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Shared statistics registry.
//   - Replaces MinerStats/ThreadStats: atomic share counters plus one atomic hashrate slot per worker.
