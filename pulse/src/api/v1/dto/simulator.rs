//! Simulated feed control DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorAction {
    Start,
    Stop,
}

/// Request body for `POST /v1/simulator`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SimulatorRequest {
    pub action: SimulatorAction,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorResponse {
    pub simulator_running: bool,
}
