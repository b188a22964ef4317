//! Destination store gateway trait.

use async_trait::async_trait;

use waypoint_core::{Destination, DestinationDraft, DestinationId};

use super::error::StoreError;

/// Gateway to the persisted destination collection.
///
/// Every operation takes the store's native key form; parsing the external
/// string encoding happens at the service boundary, before any store call
/// is attempted. Point operations are atomic at single-document
/// granularity, so there is no partial-success state to recover from.
///
/// Used as `Arc<dyn DestinationStore>`.
#[async_trait]
pub trait DestinationStore: Send + Sync {
    /// Point lookup by identifier.
    ///
    /// Absence is `Ok(None)`, not an error. No side effects.
    async fn get(&self, id: &DestinationId) -> Result<Option<Destination>, StoreError>;

    /// All records whose `owner` field equals `owner`, in store-defined
    /// order. An owner with no records yields an empty vec, not an error.
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Destination>, StoreError>;

    /// Assigns a fresh unique identifier, persists the draft, and returns
    /// the persisted record including its new id.
    async fn insert(&self, draft: DestinationDraft) -> Result<Destination, StoreError>;

    /// Deletes at most one record matching the identifier.
    ///
    /// Returns 0 when nothing matched (deleting a nonexistent record is
    /// idempotent) or 1 when a record was removed.
    async fn delete_by_id(&self, id: &DestinationId) -> Result<u64, StoreError>;
}
