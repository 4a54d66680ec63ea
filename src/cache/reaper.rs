//! Background expiry of cache entries
//!
//! The reaper wakes on a fixed interval and deletes every entry older than
//! that same interval. It runs until its cancellation token fires, so the
//! owner can stop it deterministically on shutdown or at the end of a test.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::Cache;

/// Shortest sweep period; `tokio::time::interval` rejects zero
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle onto a running reaper task
#[derive(Debug)]
pub struct Reaper {
    /// Signals the sweep loop to stop
    shutdown: CancellationToken,
    /// The spawned sweep loop
    task: JoinHandle<()>,
}

impl Reaper {
    /// Spawns a sweep loop over `cache` on the current tokio runtime
    ///
    /// # Arguments
    /// * `cache` - The cache to sweep (a shared handle is kept by the task)
    /// * `interval` - Both the sweep period and the maximum entry age,
    ///   raised to one millisecond if shorter
    pub fn spawn(cache: Cache, interval: Duration) -> Self {
        Self::with_cancellation(cache, interval, CancellationToken::new())
    }

    /// Spawns a sweep loop that also stops when `token` is cancelled
    pub fn with_cancellation(cache: Cache, interval: Duration, token: CancellationToken) -> Self {
        let shutdown = token.clone();
        let interval = interval.max(MIN_INTERVAL);

        info!(interval_ms = interval.as_millis() as u64, "Starting cache reaper");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // Skip the first tick (immediate)
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("Cache reaper shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        let evicted = cache.reap(interval);
                        debug!(evicted, remaining = cache.len(), "Cache sweep completed");
                    }
                }
            }
        });

        Self { shutdown, task }
    }

    /// Returns a token that stops this reaper when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Whether the sweep loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the sweep loop and waits for it to exit
    ///
    /// A sweep loop that died before shutdown is logged at error level.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            error!(error = %e, "Cache reaper task failed");
        }
    }
}
