//! In-memory [`DestinationStore`] backed by [`DashMap`].
//!
//! Provides concurrent read/write access without external locking.
//! Suitable for development and tests, and as the reference semantics for
//! persistent backends: every behavior the gateway contract promises is
//! observable here.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::Rng;

use waypoint_core::{Destination, DestinationDraft, DestinationId};

use crate::storage::error::StoreError;
use crate::storage::store::DestinationStore;

/// In-memory destination collection keyed by the native identifier.
///
/// Identifiers are drawn from process randomness at insert time. Each
/// request operates on the shared map independently; two concurrent
/// deletes of the same key are both safe, and at most one observes a
/// nonzero count.
pub struct MemoryStore {
    records: DashMap<DestinationId, Destination>,
}

impl MemoryStore {
    /// Creates a new, empty `MemoryStore`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Draws a fresh random identifier.
    fn fresh_id() -> DestinationId {
        DestinationId::from_bytes(rand::rng().random())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DestinationStore for MemoryStore {
    async fn get(&self, id: &DestinationId) -> Result<Option<Destination>, StoreError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Destination>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.value().owner == owner)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert(&self, draft: DestinationDraft) -> Result<Destination, StoreError> {
        // Collisions on 96 random bits are not expected in practice; the
        // loop keeps the uniqueness invariant unconditional anyway.
        loop {
            let id = Self::fresh_id();
            match self.records.entry(id) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let record = Destination {
                        id,
                        country: draft.country,
                        region: draft.region,
                        city: draft.city,
                        owner: draft.owner,
                    };
                    slot.insert(record.clone());
                    return Ok(record);
                }
            }
        }
    }

    async fn delete_by_id(&self, id: &DestinationId) -> Result<u64, StoreError> {
        Ok(u64::from(self.records.remove(id).is_some()))
    }
}
