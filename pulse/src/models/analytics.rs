use serde::Serialize;

use super::{Mention, SentimentLabel, TopicCluster};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total: usize,
    pub by_sentiment: SentimentBreakdown,
    pub last_updated: i64,
}

/// Result of a mentions query: the filtered total, the newest mentions first,
/// and topic clusters over the most recent slice of the filtered set.
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct MentionsPage {
    pub total: usize,
    pub mentions: Vec<Mention>,
    pub topics: Vec<TopicCluster>,
}
