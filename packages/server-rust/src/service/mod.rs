//! Write-then-publish pipeline for destination operations.
//!
//! Composes the store gateway, the event emitter, and the outbound channel
//! into the per-request flow:
//!
//! 1. **Parse** (`destinations`): external identifier strings become native
//!    keys, or the request fails before any store call
//! 2. **Mutate**: the store operation runs; failure surfaces immediately
//!    and no event exists for that request
//! 3. **Emit** (`emitter`): exactly one event per successful write
//! 4. **Publish**: the operation completes only after the channel hand-off

pub mod destinations;
pub mod emitter;

pub use destinations::{DestinationService, ServiceError};
pub use emitter::EventEmitter;
