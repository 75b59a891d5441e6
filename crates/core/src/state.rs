//! The sponge context: running state, staging buffer and padding.

use sponge_primitives::{keccakf, KeccakLanes, WORDS};
use tracing::{debug, trace};

use crate::{lanes, Digest, SpongeError, Variant};

/// The widest rate of any supported variant (224-bit output).
pub const MAX_RATE: usize = 144;

/// Marks the last byte of every padded block.
const FINAL_BIT: u8 = 0x80;

/// Lifecycle of a [`KeccakState`]. The only transition is `Absorbing -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Absorbing,
    Finalized,
}

/// Bytes waiting for a full block. Aligned so that the lane fast path applies to it.
#[derive(Clone)]
#[repr(C, align(8))]
struct Staging([u8; MAX_RATE]);

/// A single streaming hash computation.
///
/// Owns all of its state, so independent contexts can run on different threads
/// without coordination.
#[derive(Clone)]
pub struct KeccakState {
    lanes: KeccakLanes,
    staging: Staging,
    buffered: usize,
    rate: usize,
    delim: u8,
    variant: Variant,
    mode: Mode,
}

impl KeccakState {
    pub fn new(variant: Variant) -> Self {
        let rate = variant.rate();
        debug_assert!(rate <= MAX_RATE && rate % 8 == 0);
        debug!(%variant, rate, "new sponge context");
        KeccakState {
            lanes: [0u64; WORDS],
            staging: Staging([0u8; MAX_RATE]),
            buffered: 0,
            rate,
            delim: variant.padding().delimiter(),
            variant,
            mode: Mode::Absorbing,
        }
    }

    /// Creates a context from a variant name such as `sha3-256`.
    pub fn from_name(name: &str) -> Result<Self, SpongeError> {
        Variant::from_name(name).map(Self::new)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn output_len(&self) -> usize {
        self.variant.digest_len()
    }

    /// Bytes staged for the next block. Always below [`Self::rate`].
    pub fn buffered_len(&self) -> usize {
        self.buffered
    }

    pub fn is_finalized(&self) -> bool {
        self.mode == Mode::Finalized
    }

    /// Absorbs more input. Input arriving after finalization is ignored.
    pub fn update(&mut self, input: &[u8]) {
        if self.mode == Mode::Finalized {
            trace!(len = input.len(), "ignoring input after finalization");
            return;
        }

        let rate = self.rate;
        let mut input = input;
        let mut blocks = 0usize;

        // top up a partial block first
        if self.buffered > 0 {
            let take = (rate - self.buffered).min(input.len());
            self.staging.0[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];
            if self.buffered < rate {
                return;
            }
            lanes::xor_block(&mut self.lanes, &self.staging.0[..rate]);
            keccakf(&mut self.lanes);
            self.buffered = 0;
            blocks += 1;
        }

        let mut chunks = input.chunks_exact(rate);
        for block in &mut chunks {
            lanes::xor_block(&mut self.lanes, block);
            keccakf(&mut self.lanes);
            blocks += 1;
        }

        let rest = chunks.remainder();
        self.staging.0[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
        trace!(blocks, buffered = self.buffered, "absorbed");
    }

    /// Pads and permutes the final block without emitting any output.
    ///
    /// Does nothing if the context is already finalized.
    pub fn seal(&mut self) {
        if self.mode == Mode::Finalized {
            return;
        }

        let rate = self.rate;
        let block = &mut self.staging.0[..rate];
        block[self.buffered..].fill(0);
        // OR both bits: they share a byte when only one byte of the block is free.
        block[self.buffered] |= self.delim;
        block[rate - 1] |= FINAL_BIT;

        lanes::xor_block(&mut self.lanes, &self.staging.0[..rate]);
        keccakf(&mut self.lanes);
        self.buffered = 0;
        self.mode = Mode::Finalized;
        debug!(variant = %self.variant, "sponge finalized");
    }

    /// Finalizes and writes the digest into the front of `output`.
    ///
    /// Repeated calls write the same digest. Bytes of `output` past the digest
    /// length are left untouched.
    pub fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), SpongeError> {
        let needed = self.output_len();
        if output.len() < needed {
            return Err(SpongeError::BufferTooSmall { needed, actual: output.len() });
        }
        self.seal();
        lanes::squeeze(&self.lanes, &mut output[..needed]);
        Ok(())
    }

    /// Finalizes and returns the digest as an owned value.
    pub fn finalize(&mut self) -> Digest {
        self.seal();
        let mut bytes = [0u8; crate::MAX_DIGEST_LEN];
        let len = self.output_len();
        lanes::squeeze(&self.lanes, &mut bytes[..len]);
        Digest::from_array(bytes, len)
    }

    /// Returns the context to a fresh, absorbing state of the same variant.
    pub fn reset(&mut self) {
        self.lanes = [0u64; WORDS];
        self.staging.0.fill(0);
        self.buffered = 0;
        self.mode = Mode::Absorbing;
        debug!(variant = %self.variant, "sponge reset");
    }
}

impl core::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakState")
            .field("variant", &self.variant)
            .field("buffered", &self.buffered)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
