// Health publisher endpoints

use axum::{extract::State, http::StatusCode, response::Json};

use crate::web::{AppState, StatusReport};

/// Current status as a bare `GOOD`/`BAD` body for load balancer probes
pub async fn get_height_status(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let status = state.status.current().await;
    let code = if !status.is_good() && state.config.bad_status_code {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    (code, status.as_str())
}

/// Status with the loop phase and the last observation
pub async fn get_status_report(State(state): State<AppState>) -> Json<StatusReport> {
    let snapshot = state.status.snapshot().await;
    let phase = *state.phase.borrow();
    Json(StatusReport {
        status: snapshot.status,
        phase,
        last_observation: snapshot.last_observation,
    })
}
