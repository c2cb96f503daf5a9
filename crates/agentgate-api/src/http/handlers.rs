//! Agent run handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::debug;

use agentgate_runtime::{RunRequest, RunResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /agents/{agent_name}/run`
pub async fn run_agent(
    State(state): State<AppState>,
    Path(agent_name): Path<String>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<Json<RunResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(agent = %agent_name, "Rejected run body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let response = state.runner.run(&agent_name, &request).await?;
    Ok(Json(response))
}

/// Liveness probe.
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
