use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::services::{
    Broadcaster, ChannelBroadcaster, Clock, FeedManager, IngestionPipeline, MentionSource,
    PipelineOptions,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: IngestionPipeline,
    pub feed: FeedManager,
    /// Concrete channel kept alongside the pipeline so handlers can subscribe.
    pub events: ChannelBroadcaster,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>, source: Box<dyn MentionSource>) -> Self {
        let config = Arc::new(config);
        let events = ChannelBroadcaster::new(config.pipeline.broadcast_capacity);
        let broadcaster: Arc<dyn Broadcaster> = Arc::new(events.clone());

        let pipeline = IngestionPipeline::new(
            PipelineOptions::from(config.as_ref()),
            broadcaster.clone(),
            clock,
        );
        let feed = FeedManager::new(
            pipeline.clone(),
            source,
            broadcaster,
            Duration::from_millis(config.simulator.interval_ms),
            config.simulator.enabled,
        );

        Self {
            config,
            pipeline,
            feed,
            events,
            started_at: Instant::now(),
        }
    }
}
