//! Periodic connection-pool statistics.

use std::time::Duration;
use tokio::sync::broadcast;

use crate::infrastructure::persistence::Database;

/// Logs pool size and idle count every `interval` until shutdown.
///
/// The first tick fires one full interval after start.
pub async fn run_pool_monitor(
    database: Database,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    tracing::info!(
        backend = database.backend(),
        interval_secs = interval.as_secs(),
        "Pool monitor started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let stats = database.stats();
                tracing::info!(
                    backend = database.backend(),
                    size = stats.size,
                    idle = stats.idle,
                    in_use = (stats.size as usize).saturating_sub(stats.idle),
                    "pool stats"
                );
            }
            _ = shutdown.recv() => {
                tracing::info!("Pool monitor stopped");
                break;
            }
        }
    }
}
