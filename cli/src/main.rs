//! Turb1600 CLI
//!
//! Hash strings, hex input or files with the Turb1600 sponge; with no
//! arguments, print the built-in known-answer self-test.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{emit_digest, message_from_file, message_from_hex, self_test, tagged_message};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "turb1600")]
#[command(about = "Turb1600 sponge hash (1024-bit digest)", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit raw digest bytes instead of lowercase hex
    #[arg(long)]
    raw: bool,

    /// Hash the bytes decoded from a hex string
    #[arg(long, value_name = "HEX", conflicts_with_all = ["file", "tag", "message"])]
    hex: Option<String>,

    /// Hash the contents of a file
    #[arg(long, value_name = "PATH", conflicts_with = "tag")]
    file: Option<PathBuf>,

    /// Prefix the message with a tag and a NUL separator before hashing
    #[arg(long, value_name = "TAG", requires = "message")]
    tag: Option<String>,

    /// Message to hash (UTF-8)
    #[arg(value_name = "STRING", conflicts_with = "file")]
    message: Option<String>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    // Usage errors exit with 1; --help and --version print and exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    });

    let message = if let Some(hex_input) = &cli.hex {
        message_from_hex(hex_input)?
    } else if let Some(path) = &cli.file {
        message_from_file(path)?
    } else if let Some(text) = &cli.message {
        match &cli.tag {
            Some(tag) => tagged_message(tag, text),
            None => text.as_bytes().to_vec(),
        }
    } else if cli.raw {
        anyhow::bail!("--raw requires an input to hash");
    } else {
        self_test();
        return Ok(());
    };

    emit_digest(&message, cli.raw)
}
