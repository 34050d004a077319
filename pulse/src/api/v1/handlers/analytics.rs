use axum::extract::State;

use crate::api::v1::response::ApiResponse;
use crate::api::AppState;
use crate::models::Analytics;

/// `GET /api/v1/analytics`
#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    tag = "analytics",
    responses(
        (status = 200, description = "Mention totals by sentiment", body = Analytics),
    )
)]
pub async fn get_analytics(State(state): State<AppState>) -> ApiResponse<Analytics> {
    ApiResponse::success(state.pipeline.analytics())
}
