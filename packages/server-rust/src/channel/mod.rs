//! Outbound mutation event channel boundary.
//!
//! [`EventChannel`] is the hand-off point between a write operation and the
//! external message broker. A successful `publish` means the event has left
//! this process's hands; delivery from there on is owned by the broker.
//!
//! The store mutation and the hand-off are two independent steps with no
//! shared transaction. If the hand-off fails after the mutation committed,
//! the caller sees an error while the store says "done" -- the documented
//! at-least-once divergence window. Implementations:
//!
//! - [`QueueChannel`]: bounded tokio mpsc sender; the receiving half is
//!   the consumer boundary
//! - [`NullChannel`]: discards events, for development without a broker

pub mod null;
pub mod queue;
pub mod relay;

pub use null::NullChannel;
pub use queue::QueueChannel;
pub use relay::spawn_logging_relay;

use async_trait::async_trait;

use waypoint_core::MutationEvent;

/// Errors surfaced when handing an event to the channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The consuming side of the channel is gone; the event cannot be
    /// handed off.
    #[error("event channel for queue {queue:?} is closed")]
    Closed {
        /// Name of the queue whose channel lost its consumer.
        queue: String,
    },
}

/// Outbound channel carrying [`MutationEvent`]s to downstream consumers.
///
/// Ownership of the event passes to the channel at hand-off; the caller
/// must not retain or re-publish it.
///
/// Used as `Arc<dyn EventChannel>`.
#[async_trait]
pub trait EventChannel: Send + Sync {
    /// Hands one event to the channel.
    ///
    /// `Ok` means the hand-off is durable from this core's perspective;
    /// the enclosing write operation must not complete before it.
    async fn publish(&self, event: MutationEvent) -> Result<(), ChannelError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    /// Verifies `Arc<dyn EventChannel>` compiles (object safety).
    #[test]
    fn event_channel_is_object_safe() {
        fn _assert_object_safe(_: &Arc<dyn EventChannel>) {}
    }
}
