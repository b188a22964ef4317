//! Destination resource handlers.
//!
//! Route contract:
//! - absence on point lookup is success: 200 with a JSON `null` body
//! - deletes are idempotent, report a count, and always publish an event
//! - malformed identifiers are client errors; store outages and channel
//!   failures are server errors, each with a distinct machine-readable code

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use waypoint_core::{DeleteOutcome, DestinationDto};

use crate::channel::ChannelError;
use crate::service::ServiceError;
use crate::storage::StoreError;

use super::AppState;

/// Error envelope returned to HTTP callers.
///
/// The `code` field lets callers tell "your input was bad" apart from
/// "try again later" without parsing prose.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            ServiceError::Store(StoreError::MalformedIdentifier { .. }) => {
                (StatusCode::BAD_REQUEST, "malformed_identifier")
            }
            ServiceError::Store(StoreError::Unavailable { .. }) => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
            }
            ServiceError::Channel(ChannelError::Closed { .. }) => {
                (StatusCode::BAD_GATEWAY, "channel_unavailable")
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = json!({
            "code": code,
            "message": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// `GET /destinations/{id}`
///
/// Absence serializes as JSON `null` with status 200; only a malformed
/// identifier or a store outage is an error.
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<DestinationDto>>, ApiError> {
    let _guard = state.shutdown.track_request();
    Ok(Json(state.service.get(&id).await?))
}

/// `GET /destinations/user/{user_id}`
///
/// Returns the owner's records as a JSON array, empty when there are none.
pub async fn list_by_owner(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<DestinationDto>>, ApiError> {
    let _guard = state.shutdown.track_request();
    Ok(Json(state.service.list_by_owner(&user_id).await?))
}

/// `POST /destinations`
///
/// Inserts the draft (any `id` in the body is ignored), publishes the
/// Insert event, and returns 201 with the created record.
pub async fn create_destination(
    State(state): State<AppState>,
    Json(dto): Json<DestinationDto>,
) -> Result<(StatusCode, Json<DestinationDto>), ApiError> {
    let _guard = state.shutdown.track_request();
    let created = state.service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /destinations/{id}`
///
/// Publishes the Delete event even when nothing matched, and reports the
/// deleted count (0 or 1).
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let _guard = state.shutdown.track_request();
    let deleted = state.service.delete(&id).await?;
    Ok(Json(DeleteOutcome { deleted }))
}
