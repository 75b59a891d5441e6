//! Conversion between raw bytes and the little-endian lane view of the state.
//!
//! Lanes are always little-endian regardless of the host. On little-endian
//! targets `u64::from_le` is free, on big-endian ones it swaps each lane.

use sponge_primitives::{KeccakLanes, STATE_BYTES};

/// XORs a block of whole lanes into the front of the state.
///
/// Only the first `block.len() / 8` lanes are touched; the capacity lanes are left alone.
#[inline]
pub fn xor_block(state: &mut KeccakLanes, block: &[u8]) {
    debug_assert!(block.len() % 8 == 0 && block.len() <= STATE_BYTES);
    cfg_if::cfg_if! {
        if #[cfg(feature = "aligned-lanes")] {
            if xor_block_aligned(state, block) {
                return;
            }
        }
    }
    xor_block_bytewise(state, block);
}

/// Decodes every lane from its eight bytes. Works for any alignment.
#[inline]
pub fn xor_block_bytewise(state: &mut KeccakLanes, block: &[u8]) {
    for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
    }
}

/// Reads the block as `u64` words in place when it is 8-byte aligned.
///
/// Returns `false`, leaving the state untouched, if the alignment check fails.
#[inline]
pub fn xor_block_aligned(state: &mut KeccakLanes, block: &[u8]) -> bool {
    match bytemuck::try_cast_slice::<u8, u64>(block) {
        Ok(words) => {
            for (lane, word) in state.iter_mut().zip(words) {
                *lane ^= u64::from_le(*word);
            }
            true
        }
        Err(_) => false,
    }
}

/// Writes the little-endian bytes of the leading lanes into `out`.
///
/// `out` may end in the middle of a lane.
#[inline]
pub fn squeeze(state: &KeccakLanes, out: &mut [u8]) {
    debug_assert!(out.len() <= STATE_BYTES);
    for (chunk, lane) in out.chunks_mut(8).zip(state.iter()) {
        let bytes = lane.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use sponge_primitives::WORDS;

    use super::*;

    #[repr(C, align(8))]
    struct Aligned([u8; STATE_BYTES + 8]);

    fn random_state(rng: &mut StdRng) -> KeccakLanes {
        core::array::from_fn(|_| rng.next_u64())
    }

    #[test]
    fn test_bytewise_is_little_endian() {
        let mut state = [0u64; WORDS];
        let block: Vec<u8> = (1..=16).collect();
        xor_block_bytewise(&mut state, &block);
        assert_eq!(state[0], 0x0807060504030201);
        assert_eq!(state[1], 0x100f0e0d0c0b0a09);
        assert!(state[2..].iter().all(|&lane| lane == 0));
    }

    #[test]
    fn test_aligned_and_bytewise_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buffer = Aligned([0u8; STATE_BYTES + 8]);
        rng.fill_bytes(&mut buffer.0);

        for rate in [72, 104, 136, 144] {
            let start = random_state(&mut rng);
            let block = &buffer.0[..rate];

            let mut fast = start;
            assert!(xor_block_aligned(&mut fast, block));
            let mut slow = start;
            xor_block_bytewise(&mut slow, block);
            assert_eq!(fast, slow);
            assert_eq!(fast[rate / 8..], start[rate / 8..]);
        }
    }

    #[test]
    fn test_unaligned_block_falls_back() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut buffer = Aligned([0u8; STATE_BYTES + 8]);
        rng.fill_bytes(&mut buffer.0);

        let unaligned = &buffer.0[1..137];
        let start = random_state(&mut rng);

        let mut fast = start;
        assert!(!xor_block_aligned(&mut fast, unaligned));
        assert_eq!(fast, start);

        let mut dispatched = start;
        xor_block(&mut dispatched, unaligned);
        let mut slow = start;
        xor_block_bytewise(&mut slow, unaligned);
        assert_eq!(dispatched, slow);
    }

    #[test]
    fn test_squeeze_partial_lane() {
        let mut state = [0u64; WORDS];
        state[0] = 0x0807060504030201;
        state[1] = 0x100f0e0d0c0b0a09;
        state[2] = 0x1817161514131211;
        state[3] = 0x201f1e1d1c1b1a19;

        let mut out = [0u8; 28];
        squeeze(&state, &mut out);
        let expected: Vec<u8> = (1..=28).collect();
        assert_eq!(out.to_vec(), expected);
    }

    #[test]
    fn test_squeeze_inverts_absorb() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut block = [0u8; 136];
        rng.fill_bytes(&mut block);

        let mut state = [0u64; WORDS];
        xor_block(&mut state, &block);
        let mut out = [0u8; 136];
        squeeze(&state, &mut out);
        assert_eq!(out, block);
    }
}
