//! Bounded in-process queue implementation of [`EventChannel`].

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use waypoint_core::MutationEvent;

use super::{ChannelError, EventChannel};

/// [`EventChannel`] backed by a bounded tokio mpsc channel.
///
/// The sending half lives inside the write pipeline; the receiving half is
/// the external consumer boundary (in production, a relay task forwarding
/// to the broker). Publishing waits for capacity, so a slow consumer
/// backpressures writers instead of dropping events.
pub struct QueueChannel {
    queue: String,
    sender: mpsc::Sender<MutationEvent>,
}

impl QueueChannel {
    /// Creates a channel for the named queue with the given bounded
    /// capacity, returning the consumer half alongside it.
    #[must_use]
    pub fn new(
        queue: impl Into<String>,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<MutationEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (
            Self {
                queue: queue.into(),
                sender,
            },
            receiver,
        )
    }

    /// Name of the queue this channel feeds.
    #[must_use]
    pub fn queue(&self) -> &str {
        &self.queue
    }
}

#[async_trait]
impl EventChannel for QueueChannel {
    async fn publish(&self, event: MutationEvent) -> Result<(), ChannelError> {
        let record_id = event.record_id.clone();
        self.sender
            .send(event)
            .await
            .map_err(|_| ChannelError::Closed {
                queue: self.queue.clone(),
            })?;
        debug!(queue = %self.queue, %record_id, "mutation event handed to channel");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use waypoint_core::{MutationKind, EVENT_SCHEMA_VERSION};

    use super::*;

    fn event(record_id: &str) -> MutationEvent {
        MutationEvent {
            kind: MutationKind::Insert,
            record_id: record_id.to_string(),
            schema_version: EVENT_SCHEMA_VERSION,
            occurred_at_millis: 0,
        }
    }

    #[tokio::test]
    async fn published_event_reaches_the_consumer() {
        let (channel, mut rx) = QueueChannel::new("destination_crud_events", 8);

        channel.publish(event("aaaaaaaaaaaaaaaaaaaaaaaa")).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.record_id, "aaaaaaaaaaaaaaaaaaaaaaaa");
        assert_eq!(received.kind, MutationKind::Insert);
    }

    #[tokio::test]
    async fn publish_preserves_order() {
        let (channel, mut rx) = QueueChannel::new("q", 8);

        channel.publish(event("aaaaaaaaaaaaaaaaaaaaaaaa")).await.unwrap();
        channel.publish(event("bbbbbbbbbbbbbbbbbbbbbbbb")).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().record_id, "aaaaaaaaaaaaaaaaaaaaaaaa");
        assert_eq!(rx.recv().await.unwrap().record_id, "bbbbbbbbbbbbbbbbbbbbbbbb");
    }

    #[tokio::test]
    async fn publish_after_consumer_drop_fails_closed() {
        let (channel, rx) = QueueChannel::new("dead-queue", 8);
        drop(rx);

        let err = channel.publish(event("aaaaaaaaaaaaaaaaaaaaaaaa")).await.unwrap_err();
        assert!(matches!(err, ChannelError::Closed { queue } if queue == "dead-queue"));
    }

    #[test]
    fn queue_name_is_exposed() {
        let (channel, _rx) = QueueChannel::new("destination_crud_events", 1);
        assert_eq!(channel.queue(), "destination_crud_events");
    }
}
