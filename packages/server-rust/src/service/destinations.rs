//! Destination resource operations.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use waypoint_core::{DestinationDraft, DestinationDto, DestinationId};

use crate::channel::{ChannelError, EventChannel};
use crate::storage::{DestinationStore, StoreError};

use super::emitter::EventEmitter;

/// Errors surfaced by destination operations.
///
/// The store and channel taxonomies pass through unchanged so the HTTP
/// layer can map each failure class to a distinct status.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Identifier parsing or store-layer failure.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The event hand-off failed. The store mutation, if any, already
    /// committed; store state and notifications have diverged.
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Per-request pipeline over the destination collection.
///
/// Holds the store gateway, the event emitter, and the outbound channel,
/// all injected at construction. Requests share nothing else; two
/// concurrent calls interleave only inside the store.
pub struct DestinationService {
    store: Arc<dyn DestinationStore>,
    emitter: EventEmitter,
    channel: Arc<dyn EventChannel>,
}

impl DestinationService {
    /// Wires a service from its collaborators.
    #[must_use]
    pub fn new(store: Arc<dyn DestinationStore>, channel: Arc<dyn EventChannel>) -> Self {
        Self {
            store,
            emitter: EventEmitter::new(),
            channel,
        }
    }

    /// Re-derives the native key from the external string form.
    ///
    /// Malformed strings fail here, before any store call.
    fn parse_id(input: &str) -> Result<DestinationId, StoreError> {
        DestinationId::from_str(input).map_err(|source| StoreError::malformed(input, source))
    }

    /// Point lookup by identifier string.
    ///
    /// Read-only: no event is produced. Absence is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<DestinationDto>, ServiceError> {
        let key = Self::parse_id(id)?;
        let record = self.store.get(&key).await?;
        Ok(record.map(DestinationDto::from))
    }

    /// All destinations belonging to `owner`, in store-defined order.
    ///
    /// Read-only: no event is produced.
    pub async fn list_by_owner(&self, owner: &str) -> Result<Vec<DestinationDto>, ServiceError> {
        let records = self.store.list_by_owner(owner).await?;
        Ok(records.into_iter().map(DestinationDto::from).collect())
    }

    /// Inserts a new destination and publishes the Insert event.
    ///
    /// The transfer shape's `id`, if present, is ignored; the store assigns
    /// a fresh one. The event is constructed only after the store confirms
    /// the insert, and the operation completes only after the hand-off.
    pub async fn create(&self, dto: DestinationDto) -> Result<DestinationDto, ServiceError> {
        let record = self.store.insert(DestinationDraft::from(dto)).await?;
        let event = self.emitter.insert_succeeded(&record);
        self.channel.publish(event).await?;

        info!(id = %record.id, owner = %record.owner, "destination created");
        Ok(DestinationDto::from(record))
    }

    /// Deletes at most one destination and publishes the Delete event.
    ///
    /// The event goes out even when nothing matched; it signals "a delete
    /// was requested and accepted by the store". Returns the deleted count
    /// (0 or 1).
    pub async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let key = Self::parse_id(id)?;
        let deleted = self.store.delete_by_id(&key).await?;
        let event = self.emitter.delete_attempted(&key);
        self.channel.publish(event).await?;

        info!(id = %key, deleted, "destination delete accepted");
        Ok(deleted)
    }
}
