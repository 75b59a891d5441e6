use crate::{
    consts::{PI_SOURCES, RHO_OFFSETS, ROUNDS, ROUND_CONSTANTS},
    KeccakLanes,
};

/// Applies the full 24-round Keccak-f[1600] permutation in place.
#[inline]
pub fn keccakf(state: &mut KeccakLanes) {
    for round in 0..ROUNDS {
        theta_rho_pi(state);
        chi(state);
        iota(state, ROUND_CONSTANTS[round]);
    }
}

/// The linear part of a round: theta, then rho, then pi.
#[inline]
pub fn theta_rho_pi(state: &mut KeccakLanes) {
    // theta
    let mut parity = [0u64; 5];
    for (x, column) in parity.iter_mut().enumerate() {
        *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }

    // rho
    for (lane, offset) in state[1..].iter_mut().zip(RHO_OFFSETS) {
        *lane = lane.rotate_left(offset);
    }

    // pi
    let previous = *state;
    for (lane, &source) in state[1..].iter_mut().zip(PI_SOURCES.iter()) {
        *lane = previous[source];
    }
}

/// The nonlinear step, applied row by row.
#[inline]
pub fn chi(state: &mut KeccakLanes) {
    for row in state.chunks_exact_mut(5) {
        let lanes = [row[0], row[1], row[2], row[3], row[4]];
        for x in 0..5 {
            row[x] = lanes[x] ^ (!lanes[(x + 1) % 5] & lanes[(x + 2) % 5]);
        }
    }
}

/// Mixes a round constant into lane 0.
#[inline]
pub fn iota(state: &mut KeccakLanes, round_constant: u64) {
    state[0] ^= round_constant;
}
