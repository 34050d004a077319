use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::models::Mention;
use crate::services::{mentions_to_csv, EXPORT_FILENAME};

/// `GET /api/v1/mentions:export`
#[utoipa::path(
    get,
    path = "/api/v1/mentions:export",
    tag = "mentions",
    operation_id = "mentions.export",
    responses(
        (status = 200, description = "Most recent mentions as CSV, oldest first", content_type = "text/csv", body = String),
        (status = 500, description = "Export failed", body = ApiError),
    )
)]
pub async fn export_mentions(State(state): State<AppState>) -> Response {
    let mentions = state.pipeline.latest(state.config.pipeline.export_limit);

    match mentions_to_csv(&mentions) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={EXPORT_FILENAME}"),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => ApiResponse::<Vec<Mention>>::from(e).into_response(),
    }
}
