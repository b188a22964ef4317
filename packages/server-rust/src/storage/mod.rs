//! Destination store gateway for the Waypoint server.
//!
//! Defines [`DestinationStore`], the interface operation handlers use for
//! all interaction with the persisted destination collection, along with
//! the error taxonomy ([`StoreError`]) and the engines implementing it:
//!
//! - [`MemoryStore`]: `DashMap`-backed in-memory document store
//! - [`UnavailableStore`]: every call fails, for exercising outage paths
//!
//! Identifier strings crossing the boundary are parsed into the native key
//! form before any of these operations run; the gateway itself only ever
//! sees well-formed keys.

pub mod engines;
pub mod error;
pub mod store;

pub use engines::{MemoryStore, UnavailableStore};
pub use error::StoreError;
pub use store::DestinationStore;
