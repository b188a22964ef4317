//! Opaque destination identifier and its strict string codec.
//!
//! The store's native key form is 12 opaque bytes; the external encoding is
//! the 24-character hex string of those bytes. Any string crossing the
//! boundary must be re-derived into the native form before a store call is
//! attempted, and malformed strings are rejected at that point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw width of a destination key in bytes.
const RAW_LEN: usize = 12;

/// Width of the hex-encoded external form.
const ENCODED_LEN: usize = RAW_LEN * 2;

/// Reasons an identifier string failed to parse into the native key form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// The string is not exactly 24 characters long.
    #[error("expected {ENCODED_LEN} hex characters, got {actual}")]
    WrongLength {
        /// Length of the rejected input.
        actual: usize,
    },
    /// The string contains characters outside `[0-9a-fA-F]`.
    #[error("identifier contains non-hex characters")]
    InvalidEncoding,
}

/// Native key of a destination record.
///
/// Assigned by the store exactly once, at insert time, and immutable from
/// then on. Distinct from its string encoding: external callers exchange
/// the 24-character hex form, which parses back losslessly via [`FromStr`].
///
/// Serializes as the hex string so wire shapes never expose raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationId([u8; RAW_LEN]);

impl DestinationId {
    /// Wraps raw key bytes produced by the store's id generator.
    #[must_use]
    pub fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for DestinationId {
    type Err = ParseIdError;

    /// Strict parse of the external hex form.
    ///
    /// Length is checked before decoding so the error distinguishes a
    /// truncated id from one with invalid characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(ParseIdError::WrongLength { actual: s.len() });
        }
        let decoded = hex::decode(s).map_err(|_| ParseIdError::InvalidEncoding)?;
        let mut bytes = [0u8; RAW_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for DestinationId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DestinationId> for String {
    fn from(id: DestinationId) -> Self {
        id.to_string()
    }
}
