// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library, generic over the error type of the
/// underlying [`crate::Store`]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    /// Error raised by the store itself, passed through untouched
    #[error(transparent)]
    Store(E),
    /// Payload could not be encoded for storage
    #[error("failed to encode value: {0}")]
    Encode(serde_json::Error),
    /// Stored value is not an encoded byte array
    #[error("failed to decode stored value: {0}")]
    Decode(#[from] serde_json::Error),
    /// Nothing has been written under the name
    #[error("no value stored under {0}")]
    NotFound(String),
}

impl<E> Error<E>
where
    E: std::error::Error + 'static,
{
    /// wraps an error coming from the store
    pub fn store(e: E) -> Self {
        Error::Store(e)
    }

    /// true if this is a missing-entry error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
