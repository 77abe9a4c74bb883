//! Background sweep of expired sessions.
//!
//! Verification never deletes rows, so without this task the table would only
//! grow. Each tick takes the write lock once.

use std::time::Duration;

use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::services::session::SessionStore;

/// Remove expired sessions once, logging how many went.
pub async fn sweep_once(sessions: &SessionStore, now: OffsetDateTime) -> usize {
    let removed = sessions.sweep_expired(now).await;
    if removed > 0 {
        info!(removed, "swept expired sessions");
    } else {
        debug!("no expired sessions to sweep");
    }
    removed
}

/// Spawn the sweeper. Returns a handle for shutdown.
pub fn spawn_sweeper(sessions: SessionStore, interval_secs: u64) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));
    info!(interval_secs = period.as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweep_once(&sessions, OffsetDateTime::now_utc()).await;
        }
    })
}

#[cfg(test)]
#[path = "sweeper_test.rs"]
mod tests;
