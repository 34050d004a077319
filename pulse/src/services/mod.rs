mod broadcast;
mod clock;
mod export;
mod feed;
mod pipeline;
mod source;

pub use broadcast::{Broadcaster, ChannelBroadcaster, RecordingBroadcaster};
pub use clock::{Clock, ManualClock, SystemClock};
pub use export::{mentions_to_csv, EXPORT_FILENAME};
pub use feed::FeedManager;
pub use pipeline::{IngestionPipeline, KeywordsInput, PipelineOptions, SPIKE_MESSAGE};
pub use source::{MentionSource, SimulatedSource, SAMPLE_TEXTS};
