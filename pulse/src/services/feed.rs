use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info};

use crate::models::{Event, Mention, MentionDraft};
use crate::services::broadcast::Broadcaster;
use crate::services::pipeline::IngestionPipeline;
use crate::services::source::MentionSource;

/// Spacing between back-dated seed mentions.
const SEED_SPACING_MS: i64 = 1200;

/// Drives a [`MentionSource`] into the pipeline on a fixed interval.
///
/// The running flag is checked before every tick; stopping the feed never
/// cancels anything, it just turns later ticks into no-ops.
#[derive(Clone)]
pub struct FeedManager {
    pipeline: IngestionPipeline,
    source: Arc<Mutex<Box<dyn MentionSource>>>,
    broadcaster: Arc<dyn Broadcaster>,
    running: Arc<AtomicBool>,
    interval: Duration,
}

impl FeedManager {
    pub fn new(
        pipeline: IngestionPipeline,
        source: Box<dyn MentionSource>,
        broadcaster: Arc<dyn Broadcaster>,
        interval: Duration,
        running: bool,
    ) -> Self {
        Self {
            pipeline,
            source: Arc::new(Mutex::new(source)),
            broadcaster,
            running: Arc::new(AtomicBool::new(running)),
            interval,
        }
    }

    fn next_draft(&self) -> MentionDraft {
        let keywords = self.pipeline.keywords();
        self.source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .next_mention(&keywords)
    }

    /// Ingest one mention if the feed is running.
    pub fn run_once(&self) -> Option<Mention> {
        if !self.is_running() {
            return None;
        }
        Some(self.pipeline.ingest(self.next_draft()))
    }

    /// Ingest `count` mentions back-dated so the newest lands
    /// `SEED_SPACING_MS` before now. Runs regardless of the running flag.
    pub fn seed(&self, count: usize) -> usize {
        for i in 0..count {
            let mut draft = self.next_draft();
            draft.timestamp -= (count - i) as i64 * SEED_SPACING_MS;
            self.pipeline.ingest(draft);
        }
        info!("Seeded {} simulated mentions", count);
        count
    }

    pub fn set_running(&self, running: bool) -> bool {
        let previous = self.running.swap(running, Ordering::SeqCst);
        if previous != running {
            info!(running, "Simulated feed toggled");
        } else {
            debug!(running, "Simulated feed toggle was a no-op");
        }
        self.broadcaster.emit(Event::SimulatorState(running));
        running
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
