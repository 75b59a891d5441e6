use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that the sponge API can return.
///
/// Every check runs before the context is touched, so a failed call leaves it unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpongeError {
    /// The requested hash variant does not exist.
    #[error("invalid hash configuration: {0}")]
    Configuration(String),

    /// The output buffer cannot hold the digest.
    #[error("output buffer holds {actual} bytes but the digest needs {needed}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// A digest was decoded from a byte string of impossible length.
    #[error("{0} bytes is not a valid digest length")]
    InvalidDigestLength(usize),

    /// A hex-encoded digest could not be decoded.
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
}
