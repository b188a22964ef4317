//! Relay task draining the in-process queue at the broker boundary.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use waypoint_core::MutationEvent;

/// Spawns a task that drains `receiver` and logs each event as serialized
/// JSON.
///
/// This task stands exactly where a broker producer would: a deployment
/// with a real transport replaces it with a client for the configured
/// queue, consuming the same receiver. The task ends when every sender is
/// dropped.
pub fn spawn_logging_relay(
    queue: String,
    mut receiver: mpsc::Receiver<MutationEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            match serde_json::to_string(&event) {
                Ok(body) => info!(%queue, %body, "mutation event delivered"),
                Err(err) => warn!(%queue, %err, "mutation event failed to serialize"),
            }
        }
        debug!(%queue, "event channel closed, relay stopping");
    })
}
