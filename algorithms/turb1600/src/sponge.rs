//! Sponge Engine
//!
//! The absorb / finalize / squeeze driver over the permutation: seed the
//! state from the instance tag, XOR message blocks into the rate with a
//! full round span between blocks, pad and absorb the final block, then
//! extract the digest with a capacity perturbation between output passes.

use crate::params::{
    DIGEST_SIZE, INSTANCE_TAG, RATE_BYTES, RATE_LANES, ROUNDS_FINAL, ROUNDS_INIT, ROUNDS_MAIN,
    STATE_LANES,
};
use crate::permute::State;

// =============================================================================
// ABSORPTION
// =============================================================================

/// XOR a full rate block into the state, one little-endian 64-bit word per
/// rate lane. Capacity lanes are untouched.
fn absorb_block(state: &mut State, block: &[u8; RATE_BYTES]) {
    for (lane, word) in state.lanes[..RATE_LANES]
        .iter_mut()
        .zip(block.chunks_exact(8))
    {
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(word);
        *lane ^= u64::from_le_bytes(bytes);
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Seed a fresh state: absorb one padded block holding the instance tag,
/// then run the warm-up rounds with indices 0..8.
///
/// The warm-up indices are local to this function; the caller's round
/// counter starts at 0 afterwards.
fn seeded() -> State {
    let mut state = State::new();
    let mut block = [0_u8; RATE_BYTES];
    block[..INSTANCE_TAG.len()].copy_from_slice(INSTANCE_TAG);
    block[INSTANCE_TAG.len()] = 0x01;
    block[RATE_BYTES - 1] |= 0x80;
    absorb_block(&mut state, &block);

    let mut warmup = 0;
    state.permute_span(&mut warmup, ROUNDS_INIT);
    state
}

// =============================================================================
// DRIVER
// =============================================================================

/// Run the absorb phase to completion: every full block with the main
/// round span, then the padded final block with the main plus final spans.
///
/// Returns the state and round counter as they stand at the start of the
/// squeeze.
fn finalized(message: &[u8]) -> (State, u64) {
    let mut state = seeded();
    let mut round = 0;

    let mut blocks = message.chunks_exact(RATE_BYTES);
    for block in blocks.by_ref() {
        let mut full = [0_u8; RATE_BYTES];
        full.copy_from_slice(block);
        absorb_block(&mut state, &full);
        state.permute_span(&mut round, ROUNDS_MAIN);
    }

    // Pad the remainder: 0x01 after the message bytes, 0x80 into the last
    // block byte. At 135 remaining bytes both land on byte 135 as 0x81.
    let rem = blocks.remainder();
    let mut last = [0_u8; RATE_BYTES];
    last[..rem.len()].copy_from_slice(rem);
    last[rem.len()] |= 0x01;
    last[RATE_BYTES - 1] |= 0x80;
    absorb_block(&mut state, &last);
    state.permute_span(&mut round, ROUNDS_MAIN + ROUNDS_FINAL);

    (state, round)
}

/// Extract the digest. Every pass flips all bits of the last capacity lane
/// (domain separation between output passes), reads the rate lanes
/// little-endian, and permutes once.
///
/// 128 output bytes fit inside one 136-byte rate pass, so a single
/// perturbation and read fill the digest; the trailing permutation still
/// runs so the loop shape stays valid for longer outputs.
fn squeeze(state: &mut State, round: &mut u64) -> [u8; DIGEST_SIZE] {
    let mut digest = [0_u8; DIGEST_SIZE];
    let mut filled = 0;
    while filled < DIGEST_SIZE {
        state.lanes[STATE_LANES - 1] ^= u64::MAX;
        for lane in &state.lanes[..RATE_LANES] {
            if filled == DIGEST_SIZE {
                break;
            }
            let take = (DIGEST_SIZE - filled).min(8);
            digest[filled..filled + take].copy_from_slice(&lane.to_le_bytes()[..take]);
            filled += take;
        }
        state.permute_span(round, 1);
    }
    digest
}

/// Hash a complete message to its 128-byte digest.
pub fn digest(message: &[u8]) -> [u8; DIGEST_SIZE] {
    let (mut state, mut round) = finalized(message);
    squeeze(&mut state, &mut round)
}

// =============================================================================
// TESTS
// =============================================================================
