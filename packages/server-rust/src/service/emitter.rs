//! Mutation event construction.

use std::time::{SystemTime, UNIX_EPOCH};

use waypoint_core::{
    Destination, DestinationId, MutationEvent, MutationKind, EVENT_SCHEMA_VERSION,
};

/// Produces exactly one [`MutationEvent`] per successful write operation,
/// correlated to that operation's outcome.
///
/// Construction is synchronous and infallible. Events exist only as return
/// values on their way to the channel; the emitter never stores them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventEmitter;

impl EventEmitter {
    /// Creates an emitter stamping the current envelope version.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Event for a confirmed insert.
    ///
    /// Call only after the store reports success, never speculatively.
    #[must_use]
    pub fn insert_succeeded(&self, record: &Destination) -> MutationEvent {
        build(MutationKind::Insert, record.id.to_string())
    }

    /// Event for an accepted delete.
    ///
    /// Emitted whether or not a record existed to remove: the event means
    /// "a delete was requested and the store accepted it", not "a record
    /// was removed". Downstream consumers rely on this.
    #[must_use]
    pub fn delete_attempted(&self, id: &DestinationId) -> MutationEvent {
        build(MutationKind::Delete, id.to_string())
    }
}

fn build(kind: MutationKind, record_id: String) -> MutationEvent {
    MutationEvent {
        kind,
        record_id,
        schema_version: EVENT_SCHEMA_VERSION,
        occurred_at_millis: now_millis(),
    }
}

/// Milliseconds since the Unix epoch, saturating instead of failing on a
/// clock set before 1970.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
