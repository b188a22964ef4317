//! Persisted destination record and its insert draft.

use serde::{Deserialize, Serialize};

use crate::id::DestinationId;

/// A persisted destination entry.
///
/// The `id` is assigned by the store at insert time and is the sole handle
/// for lookup and deletion. The descriptive fields are set at creation and
/// never mutated afterwards; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Store-assigned unique key.
    pub id: DestinationId,
    /// Free-form country name.
    pub country: String,
    /// Free-form region name.
    pub region: String,
    /// Free-form city name.
    pub city: String,
    /// Identifier of the user the record belongs to.
    pub owner: String,
}

/// Insert input: the descriptive fields without an identifier.
///
/// The store assigns a fresh [`DestinationId`] when the draft is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    /// Free-form country name.
    pub country: String,
    /// Free-form region name.
    pub region: String,
    /// Free-form city name.
    pub city: String,
    /// Identifier of the owning user.
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_serializes_id_as_string() {
        let record = Destination {
            id: DestinationId::from_bytes([1u8; 12]),
            country: "FR".to_string(),
            region: "Île-de-France".to_string(),
            city: "Paris".to_string(),
            owner: "u1".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "010101010101010101010101");
        assert_eq!(json["country"], "FR");
        assert_eq!(json["owner"], "u1");
    }

    #[test]
    fn draft_has_no_identifier_field() {
        let draft = DestinationDraft {
            country: "FR".to_string(),
            region: "Île-de-France".to_string(),
            city: "Paris".to_string(),
            owner: "u1".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
    }
}
