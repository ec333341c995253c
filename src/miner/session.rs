// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/session.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements one worker's pool session, located in the miner
// module. A session owns a single TCP connection and cycles through job
// request, nonce search, share submission and feedback until the connection
// fails, then reconnects after a fixed delay. It never gives up.
//
// Tree Location:
// - src/miner/session.rs (per-worker pool session)
// - Depends on: tokio, tracing, crate::pool, crate::core

use crate::config::MinerConfig;
use crate::core::solver::HashSolver;
use crate::core::types::{Job, SessionHandle, ShareKind, Solution};
use crate::error::{MinerError, Result};
use crate::miner::stats::StatsRegistry;
use crate::pool::{Feedback, LineProtocol, PoolClient, PoolConnection};
use crate::utils::format::FormatUtils;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Pause between a failed connection and the next attempt
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// A running tally is logged every this many accepted+rejected shares
const TALLY_EVERY: u64 = 10;

/// Account settings every session of the process sends to the pool
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub username: String,
    pub mining_key: Option<String>,
    pub rig_identifier: String,
    pub difficulty_label: String,
    pub reconnect_delay: Duration,
}

impl From<&MinerConfig> for SessionSettings {
    fn from(config: &MinerConfig) -> Self {
        Self {
            username: config.username.clone(),
            mining_key: config.mining_key.clone(),
            rig_identifier: config.rig_identifier.clone(),
            difficulty_label: config.difficulty.clone(),
            reconnect_delay: RECONNECT_DELAY,
        }
    }
}

pub struct PoolSession {
    handle: SessionHandle,
    client: PoolClient,
    settings: Arc<SessionSettings>,
    stats: Arc<StatsRegistry>,
}

impl PoolSession {
    pub fn new(
        handle: SessionHandle,
        client: PoolClient,
        settings: Arc<SessionSettings>,
        stats: Arc<StatsRegistry>,
    ) -> Self {
        Self { handle, client, settings, stats }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle
    }

    /// Mine forever: every connection failure is logged, followed by a fixed
    /// pause and a fresh connection.
    pub async fn run(self) {
        let id = self.handle.worker_id;
        loop {
            let e = self.run_once().await;
            warn!(
                "[Worker {}] 📡 {}. Reconnecting in {}s...",
                id,
                e,
                self.settings.reconnect_delay.as_secs_f64()
            );
            tokio::time::sleep(self.settings.reconnect_delay).await;
        }
    }

    /// Drive one connection from connect to failure and return what ended it
    pub async fn run_once(&self) -> MinerError {
        match self.mine_connection().await {
            Ok(never) => match never {},
            Err(e) => e,
        }
    }

    async fn mine_connection(&self) -> Result<Infallible> {
        let id = self.handle.worker_id;
        let mut conn = self.client.connect().await?;
        info!("[Worker {}] ✅ Connected to {}", id, self.client.endpoint());

        // A missing banner is tolerated; a dead connection fails on the first job request.
        match conn.read_line().await? {
            Some(version) => info!("[Worker {}] 🔐 Pool server v{}", id, version.trim()),
            None => debug!("[Worker {}] No version banner received", id),
        }

        let request = LineProtocol::job_request(
            &self.settings.username,
            &self.settings.difficulty_label,
            self.settings.mining_key.as_deref(),
        );

        loop {
            conn.send(&request).await?;
            let line = conn.expect_line().await?;

            let job = match LineProtocol::parse_job(&line) {
                Ok(job) => job,
                Err(e) => {
                    warn!("[Worker {}] Skipping malformed job '{}': {}", id, line.trim(), e);
                    continue;
                }
            };
            debug!("[Worker {}] 📋 Job base={} difficulty={}", id, job.base, job.difficulty);

            match self.solve(job).await {
                Some(solution) => self.submit(&mut conn, &solution).await?,
                None => info!("[Worker {}] Job not solved within its search range", id),
            }
        }
    }

    /// Run the search on a blocking thread so other workers keep their I/O going
    async fn solve(&self, job: Job) -> Option<Solution> {
        match tokio::task::spawn_blocking(move || HashSolver::solve_job(&job)).await {
            Ok(solution) => solution,
            Err(e) => {
                error!("[Worker {}] Solver task failed: {}", self.handle.worker_id, e);
                None
            }
        }
    }

    async fn submit(&self, conn: &mut PoolConnection, solution: &Solution) -> Result<()> {
        let hashrate = solution.hashrate();
        self.stats.set_hashrate(self.handle.worker_id, hashrate);

        let message = LineProtocol::submission(solution, hashrate, &self.settings.rig_identifier, &self.handle);
        conn.send(&message).await?;

        let feedback = Feedback::parse(conn.read_line().await?.as_deref());
        self.record_feedback(&feedback, hashrate);
        Ok(())
    }

    fn record_feedback(&self, feedback: &Feedback, hashrate: f64) {
        let id = self.handle.worker_id;
        let Some(kind) = feedback.share_kind() else {
            if let Feedback::Unknown(raw) = feedback {
                info!("[Worker {}] ℹ️ Feedback: {}", id, raw.trim());
            }
            return;
        };

        let count = self.stats.record(kind);
        match feedback {
            Feedback::Good => info!(
                "[Worker {}] ✅ Share accepted | {} | Accepted: {}",
                id,
                FormatUtils::format_hashrate(hashrate),
                count
            ),
            Feedback::Bad(reason) => info!("[Worker {}] ❌ Rejected: {} | Rejected: {}", id, reason, count),
            Feedback::Block => info!("[Worker {}] ⛓️ New block | Blocks: {}", id, count),
            Feedback::Unknown(_) => {}
        }

        if kind != ShareKind::Block {
            if let Some((accepted, rejected)) = self.tally_due() {
                info!("[Worker {}] 📊 Shares: {} good / {} bad", id, accepted, rejected);
            }
        }
    }

    /// Accepted and rejected counts when their sum is a non-zero multiple of the tally period
    fn tally_due(&self) -> Option<(u64, u64)> {
        let snapshot = self.stats.snapshot();
        let total = snapshot.accepted + snapshot.rejected;
        (total > 0 && total % TALLY_EVERY == 0).then_some((snapshot.accepted, snapshot.rejected))
    }
}


// Changelog:
// - v1.0.1 (2026-10-17): Running tally reads both counters from one snapshot.
// - v1.0.0 (2026-10-17): Per-worker pool session.
//   - Replaces the shared-connection CpuMiner: each worker owns its connection and reconnects every 5 s on failure.
