//! Countdown ticker background task

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::countdown::{Clock, CountdownController};
use crate::state::CountdownSnapshot;

/// Wall-clock spacing between recomputes
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running ticker.
///
/// `stop` is idempotent and safe to call from anywhere, including a
/// completion callback; it halts future recomputes without touching the
/// last published snapshot. Restarting means spawning a new ticker.
pub struct TickerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Request the ticker to stop
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Wait for the ticker task to finish
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Spawn the ticker driving `controller`, publishing a snapshot per tick
pub fn spawn_countdown_ticker<C: Clock>(
    controller: CountdownController<C>,
    snapshot_tx: watch::Sender<CountdownSnapshot>,
) -> TickerHandle {
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = tokio::spawn(countdown_ticker_task(controller, snapshot_tx, stop_rx));
    TickerHandle { stop_tx, task }
}

/// Tick loop: one immediate recompute, then one per interval until stopped
async fn countdown_ticker_task<C: Clock>(
    mut controller: CountdownController<C>,
    snapshot_tx: watch::Sender<CountdownSnapshot>,
    mut stop_rx: watch::Receiver<bool>,
) {
    info!("Starting countdown ticker");

    // The first interval tick fires immediately, so the initial published
    // snapshot is already correct rather than the zeroed placeholder.
    let mut interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let was_complete = controller.is_complete();
                let remaining = *controller.recompute();
                let snapshot = CountdownSnapshot::new(&remaining, controller.is_complete());

                debug!(
                    "Tick: {}d {}h {}m {}s remaining, complete={}",
                    snapshot.days_numeric,
                    snapshot.hours_numeric,
                    snapshot.minutes_numeric,
                    snapshot.seconds_numeric,
                    snapshot.is_complete,
                );

                if snapshot.is_complete && !was_complete {
                    info!("Countdown reached zero");
                }

                if let Err(e) = snapshot_tx.send(snapshot) {
                    warn!("No snapshot receivers left, stopping ticker: {}", e);
                    break;
                }
            }

            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    info!("Countdown ticker stopped");
                    break;
                }
            }
        }
    }
}
