//! Streaming Keccak and SHA-3 digests.
//!
//! A [`KeccakState`] absorbs input of any length through the Keccak-f[1600]
//! permutation and squeezes a 224, 256, 384 or 512-bit digest. The Keccak and
//! SHA-3 families share everything except the domain-separation byte written
//! during padding, see [`Padding`].
//!
//! ```
//! use sponge_core::{hash, KeccakState, Variant};
//!
//! let mut ctx = KeccakState::new(Variant::Keccak256);
//! ctx.update(b"ab");
//! ctx.update(b"c");
//! assert_eq!(ctx.finalize(), hash(Variant::Keccak256, b"abc"));
//! ```

mod digest;
mod error;
mod hasher;
mod keccak;
pub mod lanes;
mod sha3;
mod state;
pub mod utils;
mod variant;

pub use digest::{Digest, MAX_DIGEST_LEN};
pub use error::SpongeError;
pub use hasher::Hasher;
pub use keccak::{keccak256, Keccak};
pub use sha3::{sha3_256, Sha3};
pub use state::{KeccakState, MAX_RATE};
pub use variant::{Padding, Variant};

/// Starts a streaming computation.
pub fn init(variant: Variant) -> KeccakState {
    KeccakState::new(variant)
}

/// Hashes `data` in one call.
pub fn hash(variant: Variant, data: &[u8]) -> Digest {
    let mut ctx = KeccakState::new(variant);
    ctx.update(data);
    ctx.finalize()
}

/// Hashes `data` with the variant named `name`, e.g. `keccak-256`.
pub fn hash_by_name(name: &str, data: &[u8]) -> Result<Digest, SpongeError> {
    let mut ctx = KeccakState::from_name(name)?;
    ctx.update(data);
    Ok(ctx.finalize())
}
