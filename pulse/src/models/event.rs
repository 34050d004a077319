use serde::Serialize;

use super::{Analytics, Mention};

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct SpikeAlert {
    pub message: String,
    pub timestamp: i64,
}

/// Snapshot sent to an observer when it first connects.
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct InitSnapshot {
    pub mentions: Vec<Mention>,
    pub keywords: Vec<String>,
    pub analytics: Analytics,
}

/// Events pushed to observers over the broadcast channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NewMention(Mention),
    SpikeAlert(SpikeAlert),
    KeywordsUpdated(Vec<String>),
    SimulatorState(bool),
}

impl Event {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMention(_) => "new_mention",
            Self::SpikeAlert(_) => "spike_alert",
            Self::KeywordsUpdated(_) => "keywords_updated",
            Self::SimulatorState(_) => "simulator_state",
        }
    }

    /// JSON payload of the event, without the name.
    pub fn payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::NewMention(mention) => serde_json::to_value(mention),
            Self::SpikeAlert(alert) => serde_json::to_value(alert),
            Self::KeywordsUpdated(keywords) => serde_json::to_value(keywords),
            Self::SimulatorState(running) => Ok(serde_json::json!({ "simulatorRunning": running })),
        }
    }
}
