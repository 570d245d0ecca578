#![cfg_attr(not(feature = "std"), no_std)]

//! # Turb1600
//!
//! Sponge-construction hash with a 1600-bit state and a fixed 1024-bit
//! digest. The permutation is a Keccak-style round (theta, rho, pi, chi,
//! iota) with a round-twisted rotation schedule, a derived round-constant
//! generator, and a capacity perturbation between squeeze passes.
//!
//! This is an educational construction: the parameter choices depart from
//! standard Keccak, no compatibility with SHA-3 is intended, and no
//! security claim is made.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = turb1600::hash(b"Performance Matters");
//!
//! // 2. Constant-time verification
//! assert!(turb1600::verify(b"Performance Matters", &digest));
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod oneshot;
mod params;
mod permute;
mod round;
mod sponge;

// =============================================================================
// EXPORTS
// =============================================================================

pub use oneshot::{hash, verify};
pub use params::DIGEST_SIZE;
