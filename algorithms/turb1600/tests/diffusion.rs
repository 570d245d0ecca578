//! Diffusion Tests
//!
//! Avalanche behavior of the digest: single-character and single-bit
//! changes must flip a large share of the 1024 output bits.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use rand::prelude::*;

/// Differing bits between two 128-byte digests.
fn hamming(a: &[u8; 128], b: &[u8; 128]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// =============================================================================
// AVALANCHE
// =============================================================================

#[test]
fn test_abc_abd_avalanche() {
    let h1 = turb1600::hash(b"abc");
    let h2 = turb1600::hash(b"abd");

    let diff_bits = hamming(&h1, &h2);
    assert!(
        diff_bits >= 256,
        "Avalanche effect weak: only {} of 1024 bits differ",
        diff_bits
    );
}

#[test]
fn test_single_bit_flip_avalanche() {
    let sizes = [1, 17, 135, 136, 137, 500];
    let mut rng = rand::rng();

    for size in sizes {
        let mut data = vec![0u8; size];
        rng.fill(&mut data[..]);

        let bit = rng.random_range(0..size * 8);
        let mut flipped = data.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let h1 = turb1600::hash(&data);
        let h2 = turb1600::hash(&flipped);

        let diff_bits = hamming(&h1, &h2);
        // Expect ~512 of 1024 bits; generous bounds against sampling noise
        assert!(
            diff_bits > 256 && diff_bits < 768,
            "Size {}: {} of 1024 bits differ after one flipped bit",
            size,
            diff_bits
        );
    }
}

// =============================================================================
// COLLISION SHAPE CHECKS
// =============================================================================

#[test]
fn test_prefix_collision_resistance() {
    // Hash(A) should not equal Hash(A||B)
    let a = b"prefix";
    let ab = b"prefixsuffix";

    assert_ne!(
        turb1600::hash(a),
        turb1600::hash(ab),
        "Prefix collision detected"
    );
}

#[test]
fn test_suffix_collision_resistance() {
    let a = b"xyz";
    let ba = b"abcxyz";

    assert_ne!(
        turb1600::hash(a),
        turb1600::hash(ba),
        "Suffix collision detected"
    );
}

#[test]
fn test_repeated_bytes() {
    let pattern_a = vec![b'A'; 1000];
    let pattern_b = vec![b'B'; 1000];
    let pattern_0 = vec![0u8; 1000];
    let pattern_ff = vec![0xFFu8; 1000];

    let ha = turb1600::hash(&pattern_a);
    let hb = turb1600::hash(&pattern_b);
    let h0 = turb1600::hash(&pattern_0);
    let hf = turb1600::hash(&pattern_ff);

    assert_ne!(ha, hb);
    assert_ne!(ha, h0);
    assert_ne!(hb, hf);
    assert_ne!(h0, hf);
}
