//! Public API Layer
//!
use crate::params::DIGEST_SIZE;
use crate::sponge;
use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the Turb1600 digest of `message`.
///
/// Total over any byte sequence; the result is always 128 bytes.
///
/// # Example
/// ```rust
/// let digest = turb1600::hash(b"Performance Matters");
/// assert_eq!(digest.len(), turb1600::DIGEST_SIZE);
/// ```
#[must_use]
#[inline]
pub fn hash(message: &[u8]) -> [u8; DIGEST_SIZE] {
    sponge::digest(message)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time (timing attack resistant).
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = turb1600::hash(data);
/// assert!(turb1600::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(message: &[u8], expected: &[u8; DIGEST_SIZE]) -> bool {
    let computed = hash(message);
    computed.ct_eq(expected).into()
}
