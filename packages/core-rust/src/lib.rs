//! Waypoint Core — destination records, identifiers, and mutation event schemas.

pub mod dto;
pub mod events;
pub mod id;
pub mod record;

pub use dto::{DeleteOutcome, DestinationDto};
pub use events::{MutationEvent, MutationKind, EVENT_SCHEMA_VERSION};
pub use id::{DestinationId, ParseIdError};
pub use record::{Destination, DestinationDraft};
