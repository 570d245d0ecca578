//! CLI Commands
//!
//! All turb1600 CLI commands organized as separate modules.

mod digest;
mod selftest;

pub use digest::{emit_digest, message_from_file, message_from_hex, tagged_message};
pub use selftest::self_test;
