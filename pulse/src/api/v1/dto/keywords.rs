//! Keyword DTOs for the v1 API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/keywords`.
///
/// `keywords` is accepted either as an array of strings or as one
/// comma-separated string. It is kept untyped here so that wrong shapes reach
/// the validator instead of failing deserialization.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct UpdateKeywordsRequest {
    #[schema(value_type = Object)]
    pub keywords: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}
