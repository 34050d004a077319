//! v1 Mention handlers.

use axum::extract::State;
use axum_extra::extract::Query;
use validator::Validate;

use crate::api::v1::dto::{CreateMentionRequest, ListMentionsQuery};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::{Mention, MentionsPage};

/// `GET /api/v1/mentions`
#[utoipa::path(
    get,
    path = "/api/v1/mentions",
    tag = "mentions",
    operation_id = "mentions.list",
    params(ListMentionsQuery),
    responses(
        (status = 200, description = "Newest mentions with topic clusters", body = MentionsPage),
    )
)]
pub async fn list_mentions(
    State(state): State<AppState>,
    Query(query): Query<ListMentionsQuery>,
) -> ApiResponse<MentionsPage> {
    ApiResponse::success(state.pipeline.mentions(query.q.as_deref()))
}

/// `POST /api/v1/mentions`
#[utoipa::path(
    post,
    path = "/api/v1/mentions",
    tag = "mentions",
    operation_id = "mentions.create",
    request_body = CreateMentionRequest,
    responses(
        (status = 201, description = "Mention scored and ingested", body = Mention),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_mention(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<CreateMentionRequest>,
) -> ApiResponse<Mention> {
    if req.text.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Text cannot be empty");
    }
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    let now = state.pipeline.now_millis();
    let mention = state.pipeline.ingest(req.into_draft(now));
    ApiResponse::created(mention)
}
