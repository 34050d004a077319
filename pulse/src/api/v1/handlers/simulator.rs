use axum::extract::State;

use crate::api::v1::dto::{SimulatorAction, SimulatorRequest, SimulatorResponse};
use crate::api::v1::response::ApiResponse;
use crate::api::AppState;

/// `POST /api/v1/simulator`
#[utoipa::path(
    post,
    path = "/api/v1/simulator",
    tag = "simulator",
    request_body = SimulatorRequest,
    responses(
        (status = 200, description = "Current simulated feed state", body = SimulatorResponse),
    )
)]
pub async fn toggle_simulator(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<SimulatorRequest>,
) -> ApiResponse<SimulatorResponse> {
    let running = state
        .feed
        .set_running(matches!(req.action, SimulatorAction::Start));
    ApiResponse::success(SimulatorResponse {
        simulator_running: running,
    })
}
