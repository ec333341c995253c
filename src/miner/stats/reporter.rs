// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/reporter.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the periodic aggregate report, located in the stats
// subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/reporter.rs (periodic statistics log)
// - Depends on: tokio, tracing, registry

use super::registry::{StatsRegistry, StatsSnapshot};
use crate::utils::format::FormatUtils;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(60);

pub struct Reporter {
    stats: Arc<StatsRegistry>,
    interval: Duration,
}

impl Reporter {
    pub fn new(stats: Arc<StatsRegistry>, interval: Duration) -> Self {
        Self { stats, interval }
    }

    pub fn report_line(snapshot: &StatsSnapshot) -> String {
        format!(
            "📊 Total hashrate: {}, Accepted: {}, Rejected: {}, Blocks: {}",
            FormatUtils::format_hashrate(snapshot.total_hashrate()),
            snapshot.accepted,
            snapshot.rejected,
            snapshot.blocks
        )
    }

    /// Log one aggregate line per interval, forever
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.interval);
        interval.tick().await; // first tick completes immediately

        loop {
            interval.tick().await;
            info!("{}", Self::report_line(&self.stats.snapshot()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_sums_workers() {
        let snapshot = StatsSnapshot {
            accepted: 12,
            rejected: 3,
            blocks: 1,
            hashrates: vec![600.0, 900.0],
        };
        assert_eq!(
            Reporter::report_line(&snapshot),
            "📊 Total hashrate: 1.50 kH/s, Accepted: 12, Rejected: 3, Blocks: 1"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_keeps_going() {
        let stats = Arc::new(StatsRegistry::new(1));
        let handle = tokio::spawn(Reporter::new(Arc::clone(&stats), Duration::from_secs(60)).run());
        tokio::time::sleep(Duration::from_secs(185)).await;
        assert!(!handle.is_finished());
        handle.abort();
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Periodic aggregate report.
//   - Replaces the 30 s dashboard printer with a 60 s total-hashrate/counters line.
