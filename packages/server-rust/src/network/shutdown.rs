//! Graceful shutdown control with request tracking.
//!
//! Health state transitions are lock-free via `ArcSwap`; requests in
//! flight are tracked with an atomic counter and RAII guards so the count
//! stays accurate even when a handler panics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use tokio::sync::watch;

/// Lifecycle state reported by health probes.
///
/// Transitions: Starting -> Ready -> Draining -> Stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    /// Initializing; not yet accepting requests.
    Starting,
    /// Fully operational.
    Ready,
    /// Shutting down; in-flight requests are completing.
    Draining,
    /// All requests drained; the process is about to exit.
    Stopped,
}

impl HealthState {
    /// Lowercase name used in health endpoint bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Ready => "ready",
            Self::Draining => "draining",
            Self::Stopped => "stopped",
        }
    }
}

/// Coordinates graceful shutdown across the server.
///
/// Health probes read [`state`](Self::state); handlers hold a
/// [`RequestGuard`] for their lifetime; `begin_shutdown` flips the state
/// to Draining and wakes every [`subscribe`](Self::subscribe) listener;
/// [`wait_for_drain`](Self::wait_for_drain) then blocks until the active
/// count reaches zero or the deadline passes.
#[derive(Debug)]
pub struct ShutdownController {
    signal: watch::Sender<bool>,
    active: Arc<AtomicU64>,
    state: ArcSwap<HealthState>,
}

impl ShutdownController {
    /// Creates a controller in the `Starting` state.
    #[must_use]
    pub fn new() -> Self {
        let (signal, _) = watch::channel(false);
        Self {
            signal,
            active: Arc::new(AtomicU64::new(0)),
            state: ArcSwap::from_pointee(HealthState::Starting),
        }
    }

    /// Transitions to `Ready`; readiness probes start passing.
    pub fn mark_ready(&self) {
        self.state.store(Arc::new(HealthState::Ready));
    }

    /// Transitions to `Draining` and notifies every subscriber.
    pub fn begin_shutdown(&self) {
        self.state.store(Arc::new(HealthState::Draining));
        // Send errors only mean every receiver is already gone.
        let _ = self.signal.send(true);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> HealthState {
        **self.state.load()
    }

    /// Receiver that flips to `true` when shutdown begins.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    /// RAII guard counting one request as in flight.
    ///
    /// The counter decrements when the guard drops, including during
    /// unwinding from a handler panic.
    #[must_use]
    pub fn track_request(&self) -> RequestGuard {
        self.active.fetch_add(1, Ordering::Relaxed);
        RequestGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of requests currently in flight.
    #[must_use]
    pub fn active_requests(&self) -> u64 {
        self.active.load(Ordering::Relaxed)
    }

    /// Blocks until all in-flight requests complete, up to `timeout`.
    ///
    /// Returns `true` and transitions to `Stopped` on a full drain;
    /// returns `false` with the state left at `Draining` on timeout.
    pub async fn wait_for_drain(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;

        while self.active.load(Ordering::Relaxed) != 0 {
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            // 10ms poll keeps the drain loop cheap without busy-waiting.
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.state.store(Arc::new(HealthState::Stopped));
        true
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard that decrements the active-request counter when dropped.
#[derive(Debug)]
pub struct RequestGuard {
    active: Arc<AtomicU64>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_starting_state_with_no_requests() {
        let controller = ShutdownController::new();
        assert_eq!(controller.state(), HealthState::Starting);
        assert_eq!(controller.active_requests(), 0);
    }

    #[test]
    fn state_machine_walks_starting_ready_draining() {
        let controller = ShutdownController::new();

        controller.mark_ready();
        assert_eq!(controller.state(), HealthState::Ready);

        controller.begin_shutdown();
        assert_eq!(controller.state(), HealthState::Draining);
    }

    #[test]
    fn guards_count_up_and_down() {
        let controller = ShutdownController::new();

        let first = controller.track_request();
        let second = controller.track_request();
        assert_eq!(controller.active_requests(), 2);

        drop(first);
        assert_eq!(controller.active_requests(), 1);

        drop(second);
        assert_eq!(controller.active_requests(), 0);
    }

    #[test]
    fn state_names_are_lowercase() {
        assert_eq!(HealthState::Starting.as_str(), "starting");
        assert_eq!(HealthState::Ready.as_str(), "ready");
        assert_eq!(HealthState::Draining.as_str(), "draining");
        assert_eq!(HealthState::Stopped.as_str(), "stopped");
    }

    #[tokio::test]
    async fn subscribers_wake_on_shutdown() {
        let controller = ShutdownController::new();
        let mut rx = controller.subscribe();
        assert!(!*rx.borrow());

        controller.begin_shutdown();

        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn drain_with_no_requests_stops_immediately() {
        let controller = ShutdownController::new();
        controller.mark_ready();
        controller.begin_shutdown();

        assert!(controller.wait_for_drain(Duration::from_secs(1)).await);
        assert_eq!(controller.state(), HealthState::Stopped);
    }

    #[tokio::test]
    async fn drain_waits_for_outstanding_guard() {
        let controller = Arc::new(ShutdownController::new());
        controller.mark_ready();

        let guard = controller.track_request();
        controller.begin_shutdown();

        let release = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            drop(guard);
        });

        assert!(controller.wait_for_drain(Duration::from_secs(2)).await);
        assert_eq!(controller.state(), HealthState::Stopped);
        release.await.unwrap();
    }

    #[tokio::test]
    async fn drain_times_out_while_a_guard_is_held() {
        let controller = ShutdownController::new();
        controller.mark_ready();

        let _guard = controller.track_request();
        controller.begin_shutdown();

        assert!(!controller.wait_for_drain(Duration::from_millis(50)).await);
        assert_eq!(controller.state(), HealthState::Draining);
    }
}
