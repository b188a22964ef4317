//! No-op [`EventChannel`] implementation.

use async_trait::async_trait;
use tracing::debug;

use waypoint_core::MutationEvent;

use super::{ChannelError, EventChannel};

/// An `EventChannel` that accepts and discards every event.
///
/// Hand-off always succeeds immediately. For development and tests that
/// exercise the write path without a broker; events are still traced at
/// debug level so they remain observable.
pub struct NullChannel;

#[async_trait]
impl EventChannel for NullChannel {
    async fn publish(&self, event: MutationEvent) -> Result<(), ChannelError> {
        debug!(kind = ?event.kind, record_id = %event.record_id, "mutation event discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use waypoint_core::{MutationKind, EVENT_SCHEMA_VERSION};

    use super::*;

    #[tokio::test]
    async fn publish_always_succeeds() {
        let channel = NullChannel;
        let event = MutationEvent {
            kind: MutationKind::Delete,
            record_id: "000000000000000000000000".to_string(),
            schema_version: EVENT_SCHEMA_VERSION,
            occurred_at_millis: 0,
        };

        assert!(channel.publish(event).await.is_ok());
    }
}
