//! Mention request DTOs for the v1 API.

use serde::Deserialize;
use validator::Validate;

use crate::models::{MentionDraft, Platform};

/// Query parameters for `GET /v1/mentions`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct ListMentionsQuery {
    /// Case-insensitive substring to match against mention text.
    pub q: Option<String>,
}

/// Request body for `POST /v1/mentions`: a mention pushed by an external feed.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentionRequest {
    pub platform: Platform,
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
    /// Creation time in milliseconds since the epoch. Defaults to now.
    pub timestamp: Option<i64>,
}

impl CreateMentionRequest {
    pub fn into_draft(self, now: i64) -> MentionDraft {
        MentionDraft::new(self.platform, self.text, self.timestamp.unwrap_or(now))
    }
}
