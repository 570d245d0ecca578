//! Permutation
//!
//! One round over the 1600-bit state: theta (column parity mixing), rho+pi
//! (twisted lane rotation and shuffle through a scratch buffer), chi
//! (nonlinear row transform) and iota (round-constant injection).
//!
//! Two departures from the standard Keccak round: the rho offsets pick up a
//! round-dependent twist, and iota targets a round-dependent lane instead
//! of lane 0.

use crate::params::{PI_SHUFFLE, RHO_OFFSETS, STATE_LANES};
use crate::round::{rot_offset, round_constant};

// =============================================================================
// STATE
// =============================================================================

/// The 25-lane sponge state plus the scratch buffer the rho+pi step
/// shuffles through.
///
/// The scratch contents carry no meaning between rounds.
pub struct State {
    /// The 5×5 lane grid, row-major: lane (x, y) at index `x + 5y`.
    pub lanes: [u64; STATE_LANES],
    scratch: [u64; STATE_LANES],
}

impl State {
    /// All-zero state.
    pub const fn new() -> Self {
        Self {
            lanes: [0; STATE_LANES],
            scratch: [0; STATE_LANES],
        }
    }

    /// Apply one full round with index `round`.
    pub fn permute_round(&mut self, round: u64) {
        theta(&mut self.lanes);
        rho_pi(&mut self.lanes, &mut self.scratch, round);
        chi(&mut self.lanes);
        iota(&mut self.lanes, round);
    }

    /// Apply `count` consecutive rounds, advancing `*round` once each.
    pub fn permute_span(&mut self, round: &mut u64, count: u64) {
        for _ in 0..count {
            self.permute_round(*round);
            *round += 1;
        }
    }
}

// =============================================================================
// SUBLAYERS
// =============================================================================

/// Column parity mixing: every lane absorbs the parity of its two
/// neighbouring columns, one of them rotated by a single bit.
fn theta(lanes: &mut [u64; STATE_LANES]) {
    let mut parity = [0_u64; 5];
    for (x, column) in parity.iter_mut().enumerate() {
        *column = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
    }
    for x in 0..5 {
        let effect = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            lanes[x + 5 * y] ^= effect;
        }
    }
}

/// Rotate every lane by its twisted offset and move it to its pi
/// destination, staging through the scratch buffer.
fn rho_pi(lanes: &mut [u64; STATE_LANES], scratch: &mut [u64; STATE_LANES], round: u64) {
    for (i, &lane) in lanes.iter().enumerate() {
        scratch[PI_SHUFFLE[i]] = lane.rotate_left(rot_offset(round, RHO_OFFSETS[i]));
    }
    lanes.copy_from_slice(scratch);
}

/// Nonlinear row transform. Each of the five updates reads the row as it
/// was before any write in this row; the destructured snapshot keeps a
/// later lane from seeing a partially updated neighbour.
#[allow(clippy::many_single_char_names)]
fn chi(lanes: &mut [u64; STATE_LANES]) {
    for row in lanes.chunks_exact_mut(5) {
        let (a, b, c, d, e) = (row[0], row[1], row[2], row[3], row[4]);
        row[0] ^= !b & c;
        row[1] ^= !c & d;
        row[2] ^= !d & e;
        row[3] ^= !e & a;
        row[4] ^= !a & b;
    }
}

/// Inject the round constant into lane `(round * 7) mod 25`.
const fn iota(lanes: &mut [u64; STATE_LANES], round: u64) {
    #[allow(clippy::cast_possible_truncation)] // reduced mod 25 before the cast
    let target = ((round % 25) * 7 % 25) as usize;
    lanes[target] ^= round_constant(round);
}

// =============================================================================
// TESTS
// =============================================================================
