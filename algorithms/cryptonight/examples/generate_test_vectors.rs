//! Generator for the canonical test vectors
//!
//! Regenerates the JSON consumed by `tests/vectors.rs`:
//!
//! ```text
//! cargo run --release --example generate_test_vectors > tests/test_vectors.json
//! ```
//!
//! Printable inputs carry their own text in the `input` field; binary inputs
//! use magic labels that the test decodes. The set covers every finalizer
//! branch and a 200-byte input that crosses the sponge rate boundary.

#![allow(clippy::unwrap_used)]

use serde_json::json;

fn vector(name: &str, label: &str, input: &[u8]) -> serde_json::Value {
    let out = cryptonight::hash_full(input);
    json!({
        "name": name,
        "input": label,
        "finalizer": out.finalizer.name(),
        "hash": hex::encode(out.digest)
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    vectors.push(vector("empty", "", b""));
    vectors.push(vector("zero-byte", "BYTE_00", &[0u8]));
    vectors.push(vector("short-sentence", "This is a test", b"This is a test"));
    vectors.push(vector(
        "motto",
        "de omnibus dubitandum",
        b"de omnibus dubitandum",
    ));

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    // Longer than one mix entry, still inside one rate block.
    let pangram = "The quick brown fox jumps over the lazy dog";
    vectors.push(vector("pangram", pangram, pangram.as_bytes()));

    // 200 bytes crosses the 136-byte sponge rate boundary.
    let counting: Vec<u8> = (0..200u8).collect();
    vectors.push(vector("counting-200", "COUNTING_200", &counting));

    // =========================================================================
    // 3. FINALIZER COVERAGE
    // =========================================================================

    vectors.push(vector("algorithm-name", "cryptonight", b"cryptonight"));
    vectors.push(vector("digits", "0123456789", b"0123456789"));
    vectors.push(vector("answer", "42", b"42"));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
