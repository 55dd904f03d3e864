use crate::models::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns a spawned task and aborts it when dropped.
#[derive(Debug)]
pub struct TaskGuard(JoinHandle<()>);

impl TaskGuard {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self(handle)
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Emits `ticks` [`AppEvent::Tick`]s, one per [`TICK_INTERVAL`], for the
/// countdown identified by `session_id` and `generation`.
pub fn spawn_countdown(
    tx: UnboundedSender<AppEvent>,
    session_id: u64,
    generation: u64,
    ticks: u32,
) -> TaskGuard {
    let handle = tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        for _ in 0..ticks {
            interval.tick().await;
            if tx
                .send(AppEvent::Tick {
                    session_id,
                    generation,
                })
                .is_err()
            {
                tracing::debug!(session_id, "tick receiver dropped, stopping countdown");
                return;
            }
        }
        tracing::trace!(session_id, generation, "countdown task finished");
    });
    TaskGuard::new(handle)
}
