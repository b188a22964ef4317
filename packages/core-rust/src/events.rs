//! Mutation event schema handed to the outbound message channel.
//!
//! An event describes one state-changing store operation and exists only as
//! the return value of that operation on its way to the channel; it is
//! never stored. The channel owns the event from hand-off onward.

use serde::{Deserialize, Serialize};

/// Envelope version stamped on every event.
///
/// The observed wire format carried only `kind` and `recordId`; the version
/// and timestamp fields are a forward-compatible extension so consumers can
/// detect future envelope changes.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// What happened to the record.
///
/// Closed set: extend by adding variants, never by overloading the meaning
/// of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutationKind {
    /// A record was inserted and confirmed by the store.
    Insert,
    /// A delete was requested and accepted by the store, whether or not a
    /// record existed to remove.
    Delete,
}

/// Event describing one store mutation.
///
/// Serialized as camelCase JSON for the outbound channel body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationEvent {
    /// The kind of mutation.
    pub kind: MutationKind,
    /// String form of the affected record's identifier.
    pub record_id: String,
    /// Envelope version, currently [`EVENT_SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Milliseconds since the Unix epoch at event construction.
    pub occurred_at_millis: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_camel_case() {
        let event = MutationEvent {
            kind: MutationKind::Insert,
            record_id: "010101010101010101010101".to_string(),
            schema_version: EVENT_SCHEMA_VERSION,
            occurred_at_millis: 1_700_000_000_000,
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "insert");
        assert_eq!(json["recordId"], "010101010101010101010101");
        assert_eq!(json["schemaVersion"], 1);
        assert_eq!(json["occurredAtMillis"], 1_700_000_000_000_i64);
    }

    #[test]
    fn kind_round_trips() {
        for kind in [MutationKind::Insert, MutationKind::Delete] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: MutationKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn delete_kind_uses_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&MutationKind::Delete).unwrap(),
            "\"delete\""
        );
    }
}
