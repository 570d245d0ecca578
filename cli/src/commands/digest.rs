//! Digest Command
//!
//! Resolves the selected input mode to message bytes, hashes them, and
//! emits lowercase hex or raw digest bytes on stdout.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Decode a `--hex` argument. Odd-length or non-hex input is a usage error.
pub fn message_from_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).with_context(|| format!("invalid hex input: {input:?}"))
}

/// Read the message bytes for a `--file` argument.
pub fn message_from_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Build the `--tag` message: `utf8(tag) || 0x00 || utf8(string)`.
pub fn tagged_message(tag: &str, text: &str) -> Vec<u8> {
    let mut message = Vec::with_capacity(tag.len() + 1 + text.len());
    message.extend_from_slice(tag.as_bytes());
    message.push(0x00);
    message.extend_from_slice(text.as_bytes());
    message
}

/// Hash the message and write the digest to stdout.
pub fn emit_digest(message: &[u8], raw: bool) -> Result<()> {
    let digest = turb1600::hash(message);

    if raw {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(&digest)?;
        handle.flush()?;
    } else {
        println!("{}", hex::encode(digest));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{message_from_hex, tagged_message};

    #[test]
    fn hex_round_trips() {
        assert_eq!(message_from_hex("616263").unwrap(), b"abc");
        assert_eq!(message_from_hex("").unwrap(), b"");
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(message_from_hex("abc").is_err(), "odd length must fail");
        assert!(message_from_hex("zz").is_err(), "non-hex must fail");
    }

    #[test]
    fn tagged_message_layout() {
        assert_eq!(tagged_message("tag", "msg"), b"tag\x00msg");
        assert_eq!(tagged_message("", ""), b"\x00");
    }

    #[test]
    fn tag_moves_the_separator() {
        // ("ab", "c") and ("a", "bc") must produce different messages
        assert_ne!(tagged_message("ab", "c"), tagged_message("a", "bc"));
    }
}
