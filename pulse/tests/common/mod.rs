#![allow(dead_code)]

use std::sync::Arc;

use pulse::models::{MentionDraft, Platform};
use pulse::services::{IngestionPipeline, ManualClock, PipelineOptions, RecordingBroadcaster};

pub const T0: i64 = 1_700_000_000_000;
pub const MINUTE: i64 = 60_000;

pub struct Harness {
    pub pipeline: IngestionPipeline,
    pub events: Arc<RecordingBroadcaster>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(options: PipelineOptions) -> Harness {
    let events = Arc::new(RecordingBroadcaster::new());
    let clock = Arc::new(ManualClock::new(T0));
    let pipeline = IngestionPipeline::new(options, events.clone(), clock.clone());
    Harness {
        pipeline,
        events,
        clock,
    }
}

pub fn draft(text: &str, timestamp: i64) -> MentionDraft {
    MentionDraft::new(Platform::Twitter, text, timestamp)
}

/// Ingest `count` copies of a neutral mention stamped at `timestamp`.
pub fn ingest_at(pipeline: &IngestionPipeline, count: usize, timestamp: i64) {
    for _ in 0..count {
        pipeline.ingest(draft("checking in on the product", timestamp));
    }
}
