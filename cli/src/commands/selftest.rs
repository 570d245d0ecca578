//! Self-Test Command
//!
//! Zero-argument invocation: hash the built-in known-answer messages and
//! print one `repr -> hex(digest)` line each.

/// Known-answer messages: the compatibility anchors plus two classic
/// ASCII strings.
fn messages() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"a".to_vec(),
        b"abc".to_vec(),
        b"message digest".to_vec(),
        b"The quick brown fox jumps over the lazy dog".to_vec(),
        vec![0u8; 135],
        vec![0u8; 136],
        vec![0u8; 137],
        (0..=255).collect(),
    ]
}

/// Render a message as a byte-string literal (`b"..."` with `\x` escapes).
fn printable(message: &[u8]) -> String {
    format!("b\"{}\"", message.escape_ascii())
}

/// Hash every known-answer message and print its digest.
pub fn self_test() {
    for message in messages() {
        let digest = turb1600::hash(&message);
        println!("{} -> {}", printable(&message), hex::encode(digest));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{messages, printable};

    #[test]
    fn printable_escapes_control_bytes() {
        assert_eq!(printable(b"abc"), "b\"abc\"");
        assert_eq!(printable(b"\x00\xff"), "b\"\\x00\\xff\"");
    }

    #[test]
    fn message_list_covers_the_rate_boundary() {
        let lengths: Vec<usize> = messages().iter().map(Vec::len).collect();
        for len in [0, 135, 136, 137, 256] {
            assert!(lengths.contains(&len), "missing length {len}");
        }
    }
}
