use super::session::TranscriptSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Auto-save interval used when the caller has no preference
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Periodic background saver for a shared transcript session.
///
/// Every interval the task takes the session lock and performs an
/// auto-save of whatever has accumulated, skipping quietly while the
/// buffer is empty. Auto-saves never stamp the session end time, so a
/// later final save still closes the session normally.
pub struct AutoSaver {
    handle: JoinHandle<()>,
}

impl AutoSaver {
    /// Spawn the auto-save task
    pub fn start(session: Arc<Mutex<TranscriptSession>>, interval: Duration) -> Self {
        info!("Starting transcript auto-save (interval: {:?})", interval);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick fires immediately; consume it so the first
            // save happens one full interval in.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let mut session = session.lock().await;
                if session.message_count() == 0 {
                    continue;
                }

                if let Err(e) = session.save(true).await {
                    error!("Auto-save failed: {}", e);
                }
            }
        });

        Self { handle }
    }

    /// Stop auto-saving; in-memory state of the session is untouched
    pub fn stop(self) {
        info!("Stopping transcript auto-save");
        self.handle.abort();
    }
}
