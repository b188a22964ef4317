//! Health, liveness, and readiness endpoint handlers.
//!
//! These handlers expose server health for orchestrators and monitoring.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::network::HealthState;

use super::AppState;

/// Returns detailed health information as JSON.
///
/// Always 200 -- the `state` field in the body says whether the server is
/// actually healthy, so monitoring can tell "up but draining" apart from
/// "down".
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "state": state.shutdown.state().as_str(),
        "active_requests": state.shutdown.active_requests(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Liveness probe -- always 200.
///
/// Only checks that the process is responsive; a failed liveness probe
/// triggers a restart, so downstream dependencies are deliberately not
/// consulted here.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe -- 200 when ready, 503 otherwise.
///
/// Returns 503 during startup, while draining, and after stop, which
/// removes the instance from the load balancer's endpoint list.
pub async fn readiness_handler(State(state): State<AppState>) -> StatusCode {
    if state.shutdown.state() == HealthState::Ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use crate::channel::NullChannel;
    use crate::network::{NetworkConfig, ShutdownController};
    use crate::service::DestinationService;
    use crate::storage::MemoryStore;

    use super::*;

    fn test_state() -> AppState {
        AppState {
            service: Arc::new(DestinationService::new(
                Arc::new(MemoryStore::new()),
                Arc::new(NullChannel),
            )),
            shutdown: Arc::new(ShutdownController::new()),
            config: Arc::new(NetworkConfig::default()),
            start_time: Instant::now(),
        }
    }

    #[tokio::test]
    async fn health_reports_all_fields() {
        let state = test_state();
        state.shutdown.mark_ready();

        let response = health_handler(State(state)).await;
        let json = response.0;

        assert_eq!(json["state"], "ready");
        assert_eq!(json["active_requests"], 0);
        assert!(json["uptime_secs"].is_number());
    }

    #[tokio::test]
    async fn health_reports_starting_before_ready() {
        let state = test_state();
        let response = health_handler(State(state)).await;
        assert_eq!(response.0["state"], "starting");
    }

    #[tokio::test]
    async fn health_reports_draining_after_shutdown() {
        let state = test_state();
        state.shutdown.mark_ready();
        state.shutdown.begin_shutdown();

        let response = health_handler(State(state)).await;
        assert_eq!(response.0["state"], "draining");
    }

    #[tokio::test]
    async fn health_counts_active_requests() {
        let state = test_state();
        let _guard = state.shutdown.track_request();

        let response = health_handler(State(state)).await;
        assert_eq!(response.0["active_requests"], 1);
    }

    #[tokio::test]
    async fn liveness_always_200() {
        assert_eq!(liveness_handler().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_200_when_ready() {
        let state = test_state();
        state.shutdown.mark_ready();

        assert_eq!(readiness_handler(State(state)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_503_when_starting_or_draining() {
        let starting = test_state();
        assert_eq!(
            readiness_handler(State(starting)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        let draining = test_state();
        draining.shutdown.mark_ready();
        draining.shutdown.begin_shutdown();
        assert_eq!(
            readiness_handler(State(draining)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
