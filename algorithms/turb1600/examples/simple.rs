//! Turb1600 Basic Example
//!
//! Minimal usage: `let digest = turb1600::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = turb1600::hash(data);

    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Digest: {}", hex::encode(digest));
}
