//! Keccak with the original submission padding, as used by Ethereum.

use crate::{Digest, Hasher, KeccakState, SpongeError, Variant};

#[derive(Clone, Debug)]
pub struct Keccak {
    state: KeccakState,
}

impl Keccak {
    /// Creates a new [`Keccak`] hasher with a 224-bit output.
    pub fn v224() -> Keccak {
        Keccak::new(Variant::Keccak224)
    }

    /// Creates a new [`Keccak`] hasher with a 256-bit output.
    pub fn v256() -> Keccak {
        Keccak::new(Variant::Keccak256)
    }

    /// Creates a new [`Keccak`] hasher with a 384-bit output.
    pub fn v384() -> Keccak {
        Keccak::new(Variant::Keccak384)
    }

    /// Creates a new [`Keccak`] hasher with a 512-bit output.
    pub fn v512() -> Keccak {
        Keccak::new(Variant::Keccak512)
    }

    fn new(variant: Variant) -> Keccak {
        Keccak { state: KeccakState::new(variant) }
    }

    pub fn finalize(&mut self) -> Digest {
        self.state.finalize()
    }
}

impl Hasher for Keccak {
    fn update(&mut self, input: &[u8]) {
        self.state.update(input);
    }

    fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), SpongeError> {
        self.state.finalize_into(output)
    }

    fn output_len(&self) -> usize {
        self.state.output_len()
    }
}

/// Keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut keccak256_result = [0u8; 32];
    keccak256_result.copy_from_slice(hasher.finalize().as_bytes());
    keccak256_result
}
