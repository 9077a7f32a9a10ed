//! Animation service — drives a `Sequencer` on tokio timers.
//!
//! DESIGN
//! ======
//! One task per animation owns the sequencer, the cursor, and the snapshot
//! sender, so nothing is shared and nothing is locked. The task `select!`s
//! over three sources:
//! - shutdown signal (checked first, so no step runs after `stop()`)
//! - the sequencer deadline, rescheduled after every step (ticks and hold)
//! - the cursor blink interval, independent of the sequencer
//!
//! Views subscribe through a `watch` channel and re-render on `changed()`.
//!
//! LIFECYCLE
//! =========
//! `start()` validates and spawns. `stop()` signals and awaits the task; the
//! last snapshot stays readable but never changes again. Dropping without
//! `stop()` aborts the task.

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use crate::sequencer::{CursorBlink, Sequencer, SequencerConfig, SequencerError, Snapshot};

pub struct Animation {
    snapshots: watch::Receiver<Snapshot>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Animation {
    /// Validate `config` and start ticking from the initial state.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a [`SequencerError`] for invalid config. No task is spawned.
    pub fn start(config: SequencerConfig) -> Result<Self, SequencerError> {
        let sequencer = Sequencer::new(config)?;
        let cursor = CursorBlink::new();
        let (tx, rx) = watch::channel(sequencer.snapshot(&cursor));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        debug!(phrases = sequencer.config().phrases.len(), "animation started");
        let task = tokio::spawn(run(sequencer, cursor, tx, shutdown_rx));

        Ok(Self { snapshots: rx, shutdown: Some(shutdown_tx), task: Some(task) })
    }

    /// New receiver for snapshot changes. The current value counts as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        let mut rx = self.snapshots.clone();
        rx.mark_unchanged();
        rx
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel all pending timers and freeze the snapshot. Idempotent.
    pub async fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "animation task failed");
                }
            }
            debug!("animation stopped");
        }
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(
    mut sequencer: Sequencer,
    mut cursor: CursorBlink,
    tx: watch::Sender<Snapshot>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let blink_period = sequencer.config().cursor_blink;
    let mut blink = tokio::time::interval_at(Instant::now() + blink_period, blink_period);
    blink.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut deadline = Instant::now() + sequencer.next_delay();

    loop {
        tokio::select! {
            biased;
            // Fires on stop() and on sender drop alike.
            _ = &mut shutdown => break,
            () = tokio::time::sleep_until(deadline) => {
                let step = sequencer.advance();
                trace!(?step, phrase_index = sequencer.phrase_index(), mode = ?sequencer.mode(), "sequencer step");
                deadline += sequencer.next_delay();
                publish(&tx, &sequencer, &cursor);
            }
            _ = blink.tick() => {
                cursor.toggle();
                publish(&tx, &sequencer, &cursor);
            }
        }
    }
}

fn publish(tx: &watch::Sender<Snapshot>, sequencer: &Sequencer, cursor: &CursorBlink) {
    let next = sequencer.snapshot(cursor);
    tx.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}

#[cfg(test)]
#[path = "animation_test.rs"]
mod tests;
