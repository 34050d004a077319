use chrono::{DateTime, SecondsFormat};
use serde::Serialize;

use crate::error::{PulseError, Result};
use crate::models::{Mention, Platform, SentimentLabel};

pub const EXPORT_FILENAME: &str = "mentions_export.csv";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow<'a> {
    id: &'a str,
    timestamp: String,
    source: &'a str,
    platform: Platform,
    sentiment_label: SentimentLabel,
    sentiment_score: f64,
    text: &'a str,
}

fn iso_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| millis.to_string())
}

/// Render mentions as CSV with a header row, in the order given.
pub fn mentions_to_csv(mentions: &[Mention]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for mention in mentions {
        writer.serialize(ExportRow {
            id: &mention.id,
            timestamp: iso_timestamp(mention.timestamp),
            source: &mention.source,
            platform: mention.platform,
            sentiment_label: mention.sentiment_label,
            sentiment_score: mention.sentiment_score,
            text: &mention.text,
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| PulseError::Internal(format!("Failed to flush CSV export: {e}")))
}
