//! Turb1600 Parameters
//!
//! The fixed geometry and tables of the instance: a 1600-bit state split
//! into a 1088-bit rate and 512-bit capacity, squeezed to a 1024-bit digest.
//!
//! The state is a 5×5 grid of 64-bit lanes; lane (x, y) lives at linear
//! index `x + 5y`. Lanes 0..16 are the rate, lanes 17..24 the capacity.

// =============================================================================
// GEOMETRY
// =============================================================================

/// Lanes in the sponge state (25 × 64 bits = 1600 bits).
pub const STATE_LANES: usize = 25;

/// Rate width in lanes.
pub const RATE_LANES: usize = 17;

/// Rate width in bytes (17 lanes × 8 bytes).
pub const RATE_BYTES: usize = RATE_LANES * 8;

/// Digest length in bytes (1024-bit output).
pub const DIGEST_SIZE: usize = 128;

// =============================================================================
// ROUNDS
// =============================================================================

/// Permutation rounds after every absorbed block.
pub const ROUNDS_MAIN: u64 = 36;

/// Extra rounds after the padded final block.
pub const ROUNDS_FINAL: u64 = 6;

/// Warm-up rounds while seeding the state from the instance tag.
///
/// These use round indices 0..8 but do not advance the main round counter:
/// the seeded state is a fixed constant independent of the message.
pub const ROUNDS_INIT: u64 = 8;

// =============================================================================
// INSTANCE TAG
// =============================================================================

/// Tag absorbed at initialization to separate this instance from any other
/// sponge over the same permutation (42 ASCII bytes, no trailing NUL).
pub const INSTANCE_TAG: &[u8; 42] = b"turb1600|sponge|1600|1088|512|1024|release";

// =============================================================================
// PERMUTATION TABLES
// =============================================================================

/// Base rotation offsets for the rho step, indexed by linear lane index.
///
/// The effective per-round offset adds a round-dependent twist on top of
/// these bases, see [`crate::round::rot_offset`].
pub const RHO_OFFSETS: [u32; STATE_LANES] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Destination index for each lane in the pi step: lane `i` moves to
/// `PI_SHUFFLE[i]`.
pub const PI_SHUFFLE: [usize; STATE_LANES] = [
    0, 7, 14, 21, 3, 10, 17, 24, 6, 13, 20, 2, 9, 16, 23, 5, 12, 19, 1, 8, 15, 22, 4, 11, 18,
];

// =============================================================================
// TESTS
// =============================================================================
