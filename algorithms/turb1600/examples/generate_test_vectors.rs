//! Generator for Turb1600 test vectors
//!
//! Emits the canonical JSON digests for the seven compatibility anchor
//! scenarios. Ports in other languages must reproduce these byte-for-byte.
#![allow(clippy::unwrap_used)]
use serde_json::json;

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    // Validates the empty-message final-block path (rem = 0)
    vectors.push(json!({
        "name": "empty",
        "input": "",
        "digest": hex::encode(turb1600::hash(b""))
    }));

    // Single byte
    vectors.push(json!({
        "name": "single",
        "input": "a",
        "digest": hex::encode(turb1600::hash(b"a"))
    }));

    // Standard ASCII input
    vectors.push(json!({
        "name": "abc",
        "input": "abc",
        "digest": hex::encode(turb1600::hash(b"abc"))
    }));

    // =========================================================================
    // 2. RATE BOUNDARY CONDITIONS
    // =========================================================================

    // One byte short of the rate: the padding marker lands on byte 135
    // together with the terminator (0x81)
    let rate_minus_one = vec![0u8; 135];
    vectors.push(json!({
        "name": "rate_minus_one",
        "input": "ZERO_135",
        "digest": hex::encode(turb1600::hash(&rate_minus_one))
    }));

    // Exact rate: a full-block absorb plus a zero-length final block
    let rate_exact = vec![0u8; 136];
    vectors.push(json!({
        "name": "rate_exact",
        "input": "ZERO_136",
        "digest": hex::encode(turb1600::hash(&rate_exact))
    }));

    // One byte past the rate
    let rate_plus_one = vec![0u8; 137];
    vectors.push(json!({
        "name": "rate_plus_one",
        "input": "ZERO_137",
        "digest": hex::encode(turb1600::hash(&rate_plus_one))
    }));

    // =========================================================================
    // 3. MULTI-BLOCK SPECTRUM
    // =========================================================================

    // All 256 byte values, spanning two blocks
    let spectrum: Vec<u8> = (0..=255u8).collect();
    vectors.push(json!({
        "name": "byte_spectrum",
        "input": "BYTES_0_255",
        "digest": hex::encode(turb1600::hash(&spectrum))
    }));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
