//! v1 Keyword handlers.

use axum::extract::State;

use crate::api::v1::dto::{KeywordsResponse, UpdateKeywordsRequest};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::services::KeywordsInput;

/// `GET /api/v1/keywords`
#[utoipa::path(
    get,
    path = "/api/v1/keywords",
    tag = "keywords",
    operation_id = "keywords.get",
    responses(
        (status = 200, description = "Tracked keywords", body = KeywordsResponse),
    )
)]
pub async fn get_keywords(State(state): State<AppState>) -> ApiResponse<KeywordsResponse> {
    ApiResponse::success(KeywordsResponse {
        keywords: state.pipeline.keywords(),
    })
}

/// `POST /api/v1/keywords`
#[utoipa::path(
    post,
    path = "/api/v1/keywords",
    tag = "keywords",
    operation_id = "keywords.replace",
    request_body = UpdateKeywordsRequest,
    responses(
        (status = 200, description = "Keyword set replaced", body = KeywordsResponse),
        (status = 400, description = "Missing or malformed keywords", body = ApiError),
    )
)]
pub async fn replace_keywords(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<UpdateKeywordsRequest>,
) -> ApiResponse<KeywordsResponse> {
    let input = match KeywordsInput::from_value(req.keywords.as_ref()) {
        Ok(input) => input,
        Err(e) => return e.into(),
    };

    ApiResponse::success(KeywordsResponse {
        keywords: state.pipeline.replace_keywords(input),
    })
}
