//! Binary record codec.
//!
//! Records are bincode-encoded. A failed load yields a fresh default
//! value, never a partially decoded one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::PersistError;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, PersistError> {
    bincode::serialize(value).map_err(|source| PersistError::Encode { source })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PersistError> {
    bincode::deserialize(bytes).map_err(|source| PersistError::Decode { source })
}

/// Decode, or fall back to `T::default()` on any failure.
#[must_use]
pub fn decode_or_default<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    decode(bytes).unwrap_or_else(|err| {
        tracing::warn!(%err, "discarding unreadable record");
        T::default()
    })
}
