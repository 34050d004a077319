use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::config::{ClusteringConfig, Config, PipelineConfig, SpikeConfig};
use crate::error::{PulseError, Result};
use crate::intelligence::{LexiconScorer, SpikeDetector, TopicClusterer};
use crate::models::{
    Analytics, Event, InitSnapshot, Mention, MentionDraft, MentionsPage, SentimentBreakdown,
    SpikeAlert,
};
use crate::services::broadcast::Broadcaster;
use crate::services::clock::Clock;

pub const SPIKE_MESSAGE: &str = "Spike detected in mentions";

/// Tunables for an [`IngestionPipeline`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub max_store: usize,
    pub max_returned_mentions: usize,
    pub cluster_batch_size: usize,
    pub similarity_threshold: f64,
    pub spike_window_ms: i64,
    pub spike_multiplier: f64,
    pub keywords: Vec<String>,
}

impl PipelineOptions {
    pub fn from_parts(
        pipeline: &PipelineConfig,
        clustering: &ClusteringConfig,
        spike: &SpikeConfig,
    ) -> Self {
        Self {
            max_store: pipeline.max_store.max(1),
            max_returned_mentions: pipeline.max_returned_mentions,
            cluster_batch_size: clustering.batch_size,
            similarity_threshold: clustering.similarity_threshold,
            spike_window_ms: spike.window_secs as i64 * 1000,
            spike_multiplier: spike.threshold_multiplier,
            keywords: pipeline.keywords.clone(),
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from_parts(
            &PipelineConfig::default(),
            &ClusteringConfig::default(),
            &SpikeConfig::default(),
        )
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self::from_parts(&config.pipeline, &config.clustering, &config.spike)
    }
}

/// Raw keyword-update input: either a list or a comma-separated string.
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordsInput {
    List(Vec<String>),
    Csv(String),
}

impl KeywordsInput {
    /// Validate an untyped JSON value. Anything other than a non-empty string
    /// or an array of strings is rejected.
    pub fn from_value(value: Option<&serde_json::Value>) -> Result<Self> {
        use serde_json::Value;

        match value {
            None | Some(Value::Null) => Err(PulseError::Validation("keywords required".into())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(PulseError::Validation("keywords required".into()))
            }
            Some(Value::String(s)) => Ok(Self::Csv(s.clone())),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(PulseError::Validation(format!(
                        "keywords must be strings, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Some(other) => Err(PulseError::Validation(format!(
                "keywords must be an array or a comma-separated string, got {other}"
            ))),
        }
    }

    /// Trimmed, non-empty keywords in their original order.
    pub fn normalize(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            Self::List(items) => items,
            Self::Csv(s) => s.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

struct PipelineState {
    /// Oldest first.
    mentions: VecDeque<Mention>,
    /// Mirrors `mentions` one to one.
    timestamps: VecDeque<i64>,
    keywords: Vec<String>,
    last_id: u64,
}

/// Owns the mention store, the timestamp history and the keyword set.
///
/// All mutation goes through [`IngestionPipeline::ingest`] and
/// [`IngestionPipeline::replace_keywords`], each of which holds the single
/// state lock for its whole sequence, so events leave in append order.
#[derive(Clone)]
pub struct IngestionPipeline {
    state: Arc<Mutex<PipelineState>>,
    scorer: LexiconScorer,
    clusterer: TopicClusterer,
    detector: SpikeDetector,
    broadcaster: Arc<dyn Broadcaster>,
    clock: Arc<dyn Clock>,
    max_store: usize,
    max_returned_mentions: usize,
    cluster_batch_size: usize,
}

impl IngestionPipeline {
    pub fn new(
        options: PipelineOptions,
        broadcaster: Arc<dyn Broadcaster>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = PipelineState {
            mentions: VecDeque::new(),
            timestamps: VecDeque::new(),
            keywords: options.keywords,
            last_id: 0,
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            scorer: LexiconScorer::new(),
            clusterer: TopicClusterer::new(options.similarity_threshold),
            detector: SpikeDetector::new(options.spike_window_ms, options.spike_multiplier),
            broadcaster,
            clock,
            max_store: options.max_store.max(1),
            max_returned_mentions: options.max_returned_mentions,
            cluster_batch_size: options.cluster_batch_size,
        }
    }

    fn lock(&self) -> MutexGuard<'_, PipelineState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current time according to the pipeline clock.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Score, store and announce one mention, then check for a volume spike.
    ///
    /// Order is fixed: append, trim to capacity, emit `new_mention`, run
    /// spike detection on the trimmed history, emit `spike_alert` if it
    /// fires. Every qualifying call emits its own alert.
    pub fn ingest(&self, draft: MentionDraft) -> Mention {
        let (sentiment_score, sentiment_label) = self.scorer.analyze(&draft.text);

        let mut state = self.lock();
        state.last_id += 1;
        let mention = Mention {
            id: state.last_id.to_string(),
            source: draft.platform.source_name().to_string(),
            platform: draft.platform,
            text: draft.text,
            timestamp: draft.timestamp,
            sentiment_score,
            sentiment_label,
        };

        state.mentions.push_back(mention.clone());
        state.timestamps.push_back(mention.timestamp);
        while state.mentions.len() > self.max_store {
            state.mentions.pop_front();
        }
        while state.timestamps.len() > self.max_store {
            state.timestamps.pop_front();
        }

        self.broadcaster.emit(Event::NewMention(mention.clone()));

        let now = self.clock.now_millis();
        if self.detector.detect(&state.timestamps, now) {
            warn!(
                mention_id = %mention.id,
                stored = state.timestamps.len(),
                "Mention volume spike detected"
            );
            self.broadcaster.emit(Event::SpikeAlert(SpikeAlert {
                message: SPIKE_MESSAGE.to_string(),
                timestamp: self.clock.now_millis(),
            }));
        }

        debug!(
            id = %mention.id,
            platform = %mention.platform,
            score = mention.sentiment_score,
            label = %mention.sentiment_label,
            "Mention ingested"
        );

        mention
    }

    /// Filter by case-insensitive substring, cluster the most recent slice of
    /// the result, and return the newest mentions first.
    pub fn mentions(&self, query: Option<&str>) -> MentionsPage {
        let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);

        let filtered: Vec<Mention> = {
            let state = self.lock();
            state
                .mentions
                .iter()
                .filter(|m| {
                    needle
                        .as_deref()
                        .map_or(true, |n| m.text.to_lowercase().contains(n))
                })
                .cloned()
                .collect()
        };

        let total = filtered.len();
        let batch_start = total.saturating_sub(self.cluster_batch_size);
        let topics = self.clusterer.cluster(&filtered[batch_start..]);
        let mentions = filtered
            .into_iter()
            .rev()
            .take(self.max_returned_mentions)
            .collect();

        MentionsPage {
            total,
            mentions,
            topics,
        }
    }

    pub fn analytics(&self) -> Analytics {
        let state = self.lock();
        let mut by_sentiment = SentimentBreakdown::default();
        for mention in &state.mentions {
            by_sentiment.record(mention.sentiment_label);
        }
        Analytics {
            total: state.mentions.len(),
            by_sentiment,
            last_updated: self.clock.now_millis(),
        }
    }

    /// The `limit` most recent mentions, oldest first.
    pub fn latest(&self, limit: usize) -> Vec<Mention> {
        let state = self.lock();
        let skip = state.mentions.len().saturating_sub(limit);
        state.mentions.iter().skip(skip).cloned().collect()
    }

    /// Everything an observer needs on connect.
    pub fn init_snapshot(&self) -> InitSnapshot {
        let mut mentions = self.latest(self.max_returned_mentions);
        mentions.reverse();
        InitSnapshot {
            mentions,
            keywords: self.keywords(),
            analytics: self.analytics(),
        }
    }

    pub fn keywords(&self) -> Vec<String> {
        self.lock().keywords.clone()
    }

    /// Replace the keyword set wholesale and announce it.
    pub fn replace_keywords(&self, input: KeywordsInput) -> Vec<String> {
        let keywords = input.normalize();
        let mut state = self.lock();
        state.keywords = keywords.clone();
        self.broadcaster.emit(Event::KeywordsUpdated(keywords.clone()));
        info!(keywords = ?keywords, "Tracked keywords updated");
        keywords
    }

    pub fn len(&self) -> usize {
        self.lock().mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the timestamp history. Equal to [`Self::len`] between calls.
    pub fn history_len(&self) -> usize {
        self.lock().timestamps.len()
    }

    pub fn max_store(&self) -> usize {
        self.max_store
    }
}
