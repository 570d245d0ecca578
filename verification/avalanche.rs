//! # Avalanche Checker
//!
//! Statistical diffusion measurement: hash random messages, flip one
//! random bit each, and report the Hamming-distance distribution over the
//! 1024-bit digests. A healthy sponge lands near 512 flipped bits.
//!
//! Exits nonzero when the sample mean strays from 512 by more than the
//! configured tolerance.

use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

const DIGEST_BITS: f64 = 1024.0;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "avalanche")]
#[command(about = "Measure single-bit diffusion of the Turb1600 digest", long_about = None)]
struct Cli {
    /// Number of (message, flipped message) pairs to sample
    #[arg(long, default_value_t = 1000)]
    samples: u32,

    /// Message length in bytes
    #[arg(long, default_value_t = 64)]
    size: usize,

    /// Maximum allowed deviation of the mean from 512 bits
    #[arg(long, default_value_t = 8.0)]
    tolerance: f64,
}

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Differing bits between two digests.
fn hamming(a: &[u8; 128], b: &[u8; 128]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(cli.size > 0, "message size must be at least one byte");
    anyhow::ensure!(cli.samples > 0, "need at least one sample");

    let mut rng = rand::rng();
    let mut total: u64 = 0;
    let mut min = u32::MAX;
    let mut max = 0;

    for _ in 0..cli.samples {
        let mut message = vec![0u8; cli.size];
        rng.fill(&mut message[..]);

        let bit = rng.random_range(0..cli.size * 8);
        let mut flipped = message.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let distance = hamming(&turb1600::hash(&message), &turb1600::hash(&flipped));
        total += u64::from(distance);
        min = min.min(distance);
        max = max.max(distance);
    }

    let mean = total as f64 / f64::from(cli.samples);
    let deviation = (mean - DIGEST_BITS / 2.0).abs();

    println!("samples:   {}", cli.samples);
    println!("size:      {} bytes", cli.size);
    println!("mean:      {mean:.2} / {DIGEST_BITS} bits");
    println!("min..max:  {min}..{max}");
    println!("deviation: {deviation:.2} (tolerance {:.2})", cli.tolerance);

    anyhow::ensure!(
        deviation <= cli.tolerance,
        "mean diffusion {mean:.2} strays more than {:.2} bits from 512",
        cli.tolerance
    );

    Ok(())
}
