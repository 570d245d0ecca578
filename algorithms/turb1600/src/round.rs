//! Round Schedule
//!
//! Everything that varies between permutation rounds: the per-round 64-bit
//! constant injected in the iota step, and the round-dependent twist added
//! to the base rotation offsets in the rho step.
//!
//! Unlike standard Keccak, neither table is precomputed: both are derived
//! on the fly from the round index, so the schedule extends to any number
//! of rounds without a lookup table.

// =============================================================================
// MIXER CONSTANTS
// =============================================================================

/// XOR seed folded into the round index before mixing.
const ROUND_SEED: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// First multiplier of the avalanche mixer.
const MIX_MUL_1: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// Second multiplier of the avalanche mixer.
const MIX_MUL_2: u64 = 0x1656_67B1_9E37_79F9;

/// Stride of the rotation twist: round `r` shifts every base offset by
/// `(r * 13) mod 64`.
const TWIST_STRIDE: u64 = 13;

// =============================================================================
// SCHEDULE
// =============================================================================

/// Derive the 64-bit constant for the iota step of round `round`.
///
/// A xor-shift-multiply avalanche over the round index; all arithmetic is
/// wrapping 64-bit.
#[must_use]
pub const fn round_constant(round: u64) -> u64 {
    let mut x = round ^ ROUND_SEED ^ round.rotate_left(23);
    x ^= x >> 33;
    x = x.wrapping_mul(MIX_MUL_1);
    x ^= x >> 29;
    x = x.wrapping_mul(MIX_MUL_2);
    x ^= x >> 32;
    x
}

/// Effective rotation amount for a lane with base offset `base` in round
/// `round`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // reduced mod 64 before the cast
pub const fn rot_offset(round: u64, base: u32) -> u32 {
    let twist = (round.wrapping_mul(TWIST_STRIDE) % 64) as u32;
    (base + twist) % 64
}

// =============================================================================
// TESTS
// =============================================================================
