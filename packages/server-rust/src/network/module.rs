//! Network module with deferred startup lifecycle.
//!
//! `new()` creates resources, `start()` binds the TCP listener, and
//! `serve()` accepts connections until shutdown. The separation lets the
//! binary wire shared state between binding and accepting, and lets tests
//! bind port 0 without serving.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::service::DestinationService;

use super::config::NetworkConfig;
use super::handlers::{
    create_destination, delete_destination, get_destination, health_handler, list_by_owner,
    liveness_handler, readiness_handler, AppState,
};
use super::middleware::build_http_layers;
use super::shutdown::ShutdownController;

/// How long `serve` waits for in-flight requests after the shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Manages the HTTP server lifecycle.
///
/// 1. `new()` -- allocates the shutdown controller and captures the service
/// 2. `start()` -- binds the TCP listener to the configured address
/// 3. `serve()` -- accepts requests until the shutdown future resolves,
///    then drains
pub struct NetworkModule {
    config: NetworkConfig,
    service: Arc<DestinationService>,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownController>,
}

impl NetworkModule {
    /// Creates a network module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig, service: Arc<DestinationService>) -> Self {
        Self {
            config,
            service,
            listener: None,
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    /// Shared reference to the shutdown controller.
    ///
    /// Other parts of the binary use this to inspect health state or
    /// trigger shutdown programmatically.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the axum router with all routes and middleware.
    #[must_use]
    pub fn build_router(&self) -> Router {
        build_router(
            AppState {
                service: Arc::clone(&self.service),
                shutdown: Arc::clone(&self.shutdown),
                config: Arc::new(self.config.clone()),
                start_time: Instant::now(),
            },
            &self.config,
        )
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which differs from the configured
    /// one when port 0 is used (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!(host = %self.config.host, port, "TCP listener bound");

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves requests until the shutdown future resolves, then drains.
    ///
    /// Consumes `self` because the listener moves into the server. After
    /// the signal, health transitions to Draining, in-flight requests get
    /// up to [`DRAIN_TIMEOUT`] to complete, and the state ends at Stopped
    /// on a clean drain.
    ///
    /// # Errors
    ///
    /// Returns an error on a fatal I/O failure in the accept loop.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .expect("start() must be called before serve()");

        let router = build_router(
            AppState {
                service: Arc::clone(&self.service),
                shutdown: Arc::clone(&self.shutdown),
                config: Arc::new(self.config.clone()),
                start_time: Instant::now(),
            },
            &self.config,
        );

        // Readiness probes pass from here on.
        self.shutdown.mark_ready();

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        self.shutdown.begin_shutdown();
        if self.shutdown.wait_for_drain(DRAIN_TIMEOUT).await {
            info!("all in-flight requests drained");
        } else {
            warn!(
                remaining = self.shutdown.active_requests(),
                "drain timeout expired with requests in flight"
            );
        }

        Ok(())
    }
}

/// Routes:
/// - `GET /destinations/{id}` -- point lookup (absence is 200 + `null`)
/// - `GET /destinations/user/{user_id}` -- scan by owner
/// - `POST /destinations` -- insert + Insert event
/// - `DELETE /destinations/{id}` -- delete + Delete event (always emitted)
/// - `GET /health`, `/health/live`, `/health/ready` -- probes
fn build_router(state: AppState, config: &NetworkConfig) -> Router {
    Router::new()
        .route("/destinations", post(create_destination))
        .route(
            "/destinations/{id}",
            get(get_destination).delete(delete_destination),
        )
        .route("/destinations/user/{user_id}", get(list_by_owner))
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .layer(build_http_layers(config))
        .with_state(state)
}
