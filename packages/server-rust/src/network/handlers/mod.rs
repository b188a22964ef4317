//! HTTP handler definitions for the Waypoint server.
//!
//! Defines `AppState` (the shared state carried through axum extractors)
//! and re-exports the handler functions used when building the router.

pub mod destinations;
pub mod health;

pub use destinations::{
    create_destination, delete_destination, get_destination, list_by_owner,
};
pub use health::{health_handler, liveness_handler, readiness_handler};

use std::sync::Arc;
use std::time::Instant;

use crate::service::DestinationService;

use super::{NetworkConfig, ShutdownController};

/// Shared application state passed to all axum handlers via `State`.
///
/// Holds `Arc` references so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Destination pipeline: store gateway, event emitter, outbound channel.
    pub service: Arc<DestinationService>,
    /// Graceful shutdown controller with health state and request tracking.
    pub shutdown: Arc<ShutdownController>,
    /// Network configuration.
    pub config: Arc<NetworkConfig>,
    /// Process start time, used for uptime reporting.
    pub start_time: Instant,
}
