//! Transfer shapes exchanged at the HTTP boundary.
//!
//! [`DestinationDto`] is the external projection of a
//! [`Destination`](crate::record::Destination): structurally identical, but
//! the identifier travels as its display string so the persisted key type
//! never leaks across the boundary.

use serde::{Deserialize, Serialize};

use crate::record::{Destination, DestinationDraft};

/// External-facing view of a destination record.
///
/// On output the `id` is always present (the hex form of the store key).
/// On create input it may be absent, and is ignored either way: the store
/// assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDto {
    /// Display string of the record identifier, absent on create input.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Free-form country name.
    pub country: String,
    /// Free-form region name.
    pub region: String,
    /// Free-form city name.
    pub city: String,
    /// Identifier of the owning user.
    pub owner: String,
}

impl From<&Destination> for DestinationDto {
    fn from(record: &Destination) -> Self {
        Self {
            id: Some(record.id.to_string()),
            country: record.country.clone(),
            region: record.region.clone(),
            city: record.city.clone(),
            owner: record.owner.clone(),
        }
    }
}

impl From<Destination> for DestinationDto {
    fn from(record: Destination) -> Self {
        Self {
            id: Some(record.id.to_string()),
            country: record.country,
            region: record.region,
            city: record.city,
            owner: record.owner,
        }
    }
}

impl From<DestinationDto> for DestinationDraft {
    /// Drops the transfer shape's `id`, if any. Identifiers are assigned by
    /// the store, never accepted from callers.
    fn from(dto: DestinationDto) -> Self {
        Self {
            country: dto.country,
            region: dto.region,
            city: dto.city,
            owner: dto.owner,
        }
    }
}

/// Response body for delete operations: how many records were removed
/// (0 when nothing matched, 1 otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// Number of records removed by the delete call.
    pub deleted: u64,
}
