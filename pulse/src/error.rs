use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for PulseError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PulseError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            PulseError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            PulseError::Csv(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            PulseError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            PulseError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            PulseError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;
