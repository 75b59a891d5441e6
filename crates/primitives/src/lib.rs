//! Keccak-f[1600] permutation and the fixed tables it is built from.
//!
//! The state is 25 little-endian 64-bit lanes, linearized row by row so that
//! lane `(x, y)` lives at index `x + 5 * y`.
#![cfg_attr(not(test), no_std)]

pub mod consts;
mod keccakf;

pub use keccakf::{chi, iota, keccakf, theta_rho_pi};

/// Number of 64-bit lanes in the Keccak-f[1600] state.
pub const WORDS: usize = 25;

/// Size of the state in bytes.
pub const STATE_BYTES: usize = WORDS * 8;

/// The 1600-bit permutation state.
pub type KeccakLanes = [u64; WORDS];
