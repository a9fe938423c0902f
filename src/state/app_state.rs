//! Main application state management

use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::CountdownSnapshot;

/// Shared state handed to HTTP handlers.
///
/// The ticker task owns the sender side of the snapshot channel; handlers
/// only ever read the latest published value, so no locking is needed
/// around the countdown itself.
#[derive(Debug)]
pub struct AppState {
    /// The launch instant being counted down to
    pub target: DateTime<Utc>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Latest countdown snapshot published by the ticker
    countdown_rx: watch::Receiver<CountdownSnapshot>,
}

impl AppState {
    /// Create a new AppState wired to the ticker's snapshot channel
    pub fn new(
        target: DateTime<Utc>,
        host: String,
        port: u16,
        countdown_rx: watch::Receiver<CountdownSnapshot>,
    ) -> Self {
        Self {
            target,
            start_time: Instant::now(),
            port,
            host,
            countdown_rx,
        }
    }

    /// Get the most recently published countdown snapshot
    pub fn latest_snapshot(&self) -> CountdownSnapshot {
        self.countdown_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::Remaining;

    #[test]
    fn latest_snapshot_tracks_the_channel() {
        let (tx, rx) = watch::channel(CountdownSnapshot::default());
        let state = AppState::new(Utc::now(), "127.0.0.1".to_string(), 8080, rx);

        assert_eq!(state.latest_snapshot(), CountdownSnapshot::default());

        let updated = CountdownSnapshot::new(&Remaining::from_millis(5_000), false);
        tx.send(updated.clone()).unwrap();
        assert_eq!(state.latest_snapshot(), updated);
    }
}
