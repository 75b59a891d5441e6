use crate::{KeccakState, SpongeError};

/// Streaming interface shared by every fixed-output hasher in this crate.
pub trait Hasher {
    /// Absorb additional input. Can be called multiple times.
    fn update(&mut self, input: &[u8]);

    /// Pad, permute and write the digest to the front of `output`.
    fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), SpongeError>;

    /// Digest length in bytes.
    fn output_len(&self) -> usize;
}

impl Hasher for KeccakState {
    fn update(&mut self, input: &[u8]) {
        KeccakState::update(self, input);
    }

    fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), SpongeError> {
        KeccakState::finalize_into(self, output)
    }

    fn output_len(&self) -> usize {
        KeccakState::output_len(self)
    }
}
