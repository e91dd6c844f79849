// Integration tests for the health publisher endpoints
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tower::ServiceExt;

use monitor::config::Config;
use monitor::health::{HealthStatus, Observation, SharedStatus};
use monitor::scheduler::MonitorPhase;
use monitor::web::{create_router, AppState};

fn app_state(bad_status_code: bool) -> (AppState, SharedStatus) {
    let mut config = Config::with_seeds(vec!["http://localhost:26657".to_string()]);
    config.bad_status_code = bad_status_code;

    let status = SharedStatus::new();
    let (_phase_tx, phase_rx) = watch::channel(MonitorPhase::Sleeping);
    (
        AppState::new(Arc::new(config), status.clone(), phase_rx),
        status,
    )
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let code = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (code, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_height_endpoint_starts_good() {
    let (state, _status) = app_state(false);

    let (code, body) = get(state, "/height").await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body, "GOOD");
}

#[tokio::test]
async fn test_height_endpoint_reports_bad_with_200_by_default() {
    let (state, status) = app_state(false);
    status.publish(HealthStatus::Bad, None).await;

    let (code, body) = get(state, "/height").await;

    assert_eq!(code, StatusCode::OK);
    assert_eq!(body, "BAD");
}

#[tokio::test]
async fn test_height_endpoint_returns_503_when_bad_if_enabled() {
    let (state, status) = app_state(true);
    status.publish(HealthStatus::Bad, None).await;

    let (code, body) = get(state.clone(), "/height").await;
    assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "BAD");

    status.publish(HealthStatus::Good, None).await;
    let (code, body) = get(state, "/height").await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body, "GOOD");
}

#[tokio::test]
async fn test_status_endpoint_includes_observation_and_phase() {
    let (state, status) = app_state(false);
    status
        .publish(
            HealthStatus::Bad,
            Some(Observation {
                highest_height: Some(501),
                local_height: 500,
                status: HealthStatus::Bad,
                lag: 1,
                isolated: false,
                observed_at: Utc::now(),
            }),
        )
        .await;

    let (code, body) = get(state, "/status").await;
    assert_eq!(code, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "BAD");
    assert_eq!(json["phase"], "sleeping");
    assert_eq!(json["last_observation"]["highest_height"], 501);
    assert_eq!(json["last_observation"]["local_height"], 500);
    assert_eq!(json["last_observation"]["lag"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (state, _status) = app_state(false);
    let (code, _) = get(state, "/metrics").await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}
