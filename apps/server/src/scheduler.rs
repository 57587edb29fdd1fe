//! Background scheduler for the periodic cache purge.
//!
//! Removes cache entries older than the fixed retention window, on an hourly
//! cadence, independent of request traffic.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use atlasboard_core::cache::CacheRepositoryTrait;
use atlasboard_core::constants::CACHE_RETENTION_HOURS;

use crate::main_lib::AppState;

/// Purge interval: one hour
const PURGE_INTERVAL_SECS: u64 = 60 * 60;

/// Starts the background cache purge scheduler.
pub fn start_cache_purge_scheduler(state: Arc<AppState>) {
    tokio::spawn(async move {
        info!("Cache purge scheduler started (hourly interval)");

        let mut purge_interval = interval(Duration::from_secs(PURGE_INTERVAL_SECS));
        // The first tick fires immediately; skip it so the purge waits a
        // full interval after boot.
        purge_interval.tick().await;

        loop {
            purge_interval.tick().await;
            run_purge(&state).await;
        }
    });
}

/// Runs a single purge pass. Failures are logged, never fatal.
async fn run_purge(state: &Arc<AppState>) {
    let cutoff = Utc::now() - ChronoDuration::hours(CACHE_RETENTION_HOURS);
    match state.cache_repository.purge_older_than(cutoff).await {
        Ok(removed) => {
            info!("Periodic cache purge successful: {} entries removed", removed);
        }
        Err(e) => {
            warn!("Periodic cache purge failed: {}", e);
        }
    }
}
