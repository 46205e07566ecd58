//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries. The reap
//! period is the cache TTL, so an entry can outlive its nominal expiry by at
//! most one period.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ExpiringCache;

/// Spawns the background reaper for `cache`.
///
/// The task sleeps for one TTL, sweeps, and repeats for as long as the
/// runtime lives. The shell never stops it; tests abort it through the
/// returned handle.
///
/// # Example
/// ```ignore
/// let cache = ExpiringCache::new(Duration::from_secs(300));
/// let reaper = spawn_reaper_task(cache.clone());
/// ```
pub fn spawn_reaper_task(cache: ExpiringCache) -> JoinHandle<()> {
    let period = cache.ttl();

    tokio::spawn(async move {
        info!("Starting cache reaper with a period of {:?}", period);

        loop {
            tokio::time::sleep(period).await;

            let removed = cache.reap_expired().await;

            if removed > 0 {
                let stats = cache.stats().await;
                info!(
                    "Cache reaper: removed {} expired entries ({} remaining, {} reaped in total)",
                    removed, stats.total_entries, stats.reaped
                );
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }
    })
}
