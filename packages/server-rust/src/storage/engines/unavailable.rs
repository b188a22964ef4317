//! Always-failing [`DestinationStore`] implementation.
//!
//! [`UnavailableStore`] answers every call with
//! [`StoreError::Unavailable`], standing in for an unreachable document
//! store. Useful for exercising outage paths: any pipeline wired to it
//! must surface a server error and produce no event.

use async_trait::async_trait;

use waypoint_core::{Destination, DestinationDraft, DestinationId};

use crate::storage::error::StoreError;
use crate::storage::store::DestinationStore;

/// A destination store that is permanently unreachable.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    /// Creates a store that fails every call with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::unavailable(self.reason.clone()))
    }
}

impl Default for UnavailableStore {
    fn default() -> Self {
        Self::new("document store offline")
    }
}

#[async_trait]
impl DestinationStore for UnavailableStore {
    async fn get(&self, _id: &DestinationId) -> Result<Option<Destination>, StoreError> {
        self.fail()
    }

    async fn list_by_owner(&self, _owner: &str) -> Result<Vec<Destination>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _draft: DestinationDraft) -> Result<Destination, StoreError> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: &DestinationId) -> Result<u64, StoreError> {
        self.fail()
    }
}
