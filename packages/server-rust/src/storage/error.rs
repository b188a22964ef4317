//! Store-layer error taxonomy.

use waypoint_core::ParseIdError;

/// Errors surfaced by [`DestinationStore`](super::DestinationStore)
/// operations and by identifier parsing at the boundary.
///
/// Absence of a record is never an error: `get` returns `Ok(None)` and
/// `delete_by_id` returns a zero count. The two variants here map to the
/// two caller-visible failure classes -- "your input was bad" and "try
/// again later" -- and must stay distinguishable all the way to the
/// surface.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The caller-supplied identifier string does not parse into the
    /// store's native key form. No store call was attempted.
    #[error("malformed identifier {input:?}: {source}")]
    MalformedIdentifier {
        /// The rejected input string.
        input: String,
        /// Why parsing failed.
        #[source]
        source: ParseIdError,
    },
    /// The document store cannot be reached or failed at the
    /// infrastructure level. Fatal to the enclosing operation; no event is
    /// constructed and no retry happens at this layer.
    #[error("document store unavailable: {reason}")]
    Unavailable {
        /// Infrastructure-level failure description.
        reason: String,
    },
}

impl StoreError {
    /// Wraps a parse failure together with the offending input.
    pub fn malformed(input: impl Into<String>, source: ParseIdError) -> Self {
        Self::MalformedIdentifier {
            input: input.into(),
            source,
        }
    }

    /// Marks the store as unreachable with an infrastructure-level reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
