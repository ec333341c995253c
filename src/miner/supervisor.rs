// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/supervisor.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file starts the pool sessions and the statistics reporter, located in
// the miner module, and keeps them running for the life of the process.

use crate::config::MinerConfig;
use crate::core::types::SessionHandle;
use crate::miner::session::{PoolSession, SessionSettings};
use crate::miner::stats::{Reporter, StatsRegistry};
use crate::miner::stats::reporter::DEFAULT_REPORT_INTERVAL;
use crate::pool::{PoolClient, PoolEndpoint};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Range of the per-process tag sent with every share
pub const JOB_TAG_RANGE: std::ops::RangeInclusive<u32> = 10_000..=99_999;

pub struct Supervisor {
    endpoint: PoolEndpoint,
    settings: Arc<SessionSettings>,
    worker_count: usize,
    shared_job_tag: u32,
    report_interval: Duration,
    stats: Arc<StatsRegistry>,
}

impl Supervisor {
    pub fn new(config: &MinerConfig, endpoint: PoolEndpoint) -> Self {
        Self::with_settings(SessionSettings::from(config), config.worker_count(), endpoint)
    }

    pub fn with_settings(settings: SessionSettings, worker_count: usize, endpoint: PoolEndpoint) -> Self {
        Self {
            endpoint,
            settings: Arc::new(settings),
            worker_count,
            shared_job_tag: rand::thread_rng().gen_range(JOB_TAG_RANGE),
            report_interval: DEFAULT_REPORT_INTERVAL,
            stats: Arc::new(StatsRegistry::new(worker_count)),
        }
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn stats(&self) -> Arc<StatsRegistry> {
        Arc::clone(&self.stats)
    }

    pub fn shared_job_tag(&self) -> u32 {
        self.shared_job_tag
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Spawn every worker plus the reporter and wait for the workers.
    ///
    /// Workers retry forever, so this only returns if they all panic or the
    /// runtime shuts down.
    pub async fn run(self) {
        info!(
            "🚀 Starting {} workers against {} (job tag {})",
            self.worker_count, self.endpoint, self.shared_job_tag
        );

        let client = PoolClient::new(self.endpoint.clone());
        let mut workers = JoinSet::new();
        for worker_id in 0..self.worker_count {
            let session = PoolSession::new(
                SessionHandle::new(worker_id, self.shared_job_tag),
                client.clone(),
                Arc::clone(&self.settings),
                Arc::clone(&self.stats),
            );
            debug!("Spawning worker {}", worker_id);
            workers.spawn(session.run());
        }

        let reporter = tokio::spawn(Reporter::new(Arc::clone(&self.stats), self.report_interval).run());

        while let Some(result) = workers.join_next().await {
            if let Err(e) = result {
                error!("Worker task ended: {}", e);
            }
        }
        reporter.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes_registry_and_tag() {
        let config = MinerConfig { thread_count: 3, ..Default::default() };
        let supervisor = Supervisor::new(&config, PoolEndpoint::fallback());
        assert_eq!(supervisor.worker_count(), 3);
        assert_eq!(supervisor.stats().worker_count(), 3);
        assert!(JOB_TAG_RANGE.contains(&supervisor.shared_job_tag()));
    }

    #[test]
    fn test_report_interval_override() {
        let supervisor = Supervisor::new(&MinerConfig::default(), PoolEndpoint::fallback())
            .with_report_interval(Duration::from_secs(5));
        assert_eq!(supervisor.report_interval, Duration::from_secs(5));
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Session supervisor.
//   - Replaces CpuMiner::run thread spawning; one session task per worker plus the reporter.
