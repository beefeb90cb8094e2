//! Security Property Tests
//!
//! Avalanche behavior, collision sanity across related inputs, and the
//! constant-time verification helper.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use cryptonight::{hash, hash_hex, verify};
use rand::prelude::*;

// =============================================================================
// DIFFUSION
// =============================================================================

#[test]
fn test_avalanche_effect() {
    // Single bit flip should change roughly half of the output bits.
    let data1 = b"test message for avalanche analysis";
    let mut data2 = *data1;
    data2[0] ^= 0x01;

    let h1 = hash(data1);
    let h2 = hash(&data2);

    assert_ne!(h1, h2, "Single bit flip must change the digest");

    let mut diff_bits = 0;
    for i in 0..32 {
        diff_bits += (h1[i] ^ h2[i]).count_ones();
    }

    // 128 expected; generous bounds keep the test deterministic-friendly.
    assert!(
        diff_bits > 60 && diff_bits < 196,
        "Avalanche effect weak: only {diff_bits} of 256 bits differ"
    );
}

#[test]
fn test_prefix_collision_resistance() {
    // Hash(A) should not equal Hash(A||B).
    let ha = hash(b"prefix");
    let hab = hash(b"prefixsuffix");

    assert_ne!(ha, hab, "Prefix collision detected");
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_determinism_on_random_input() {
    let mut input = [0u8; 64];
    rand::rng().fill(&mut input[..]);

    let h1 = hash(&input);
    let h2 = hash(&input);

    assert_eq!(h1, h2, "hash() must be deterministic");
}

// =============================================================================
// VERIFICATION
// =============================================================================

#[test]
fn test_verify_accepts_and_rejects() {
    let data = b"authenticated message";
    let digest = hash(data);

    assert!(verify(data, &digest), "Valid digest must verify");
    assert!(!verify(b"tampered", &digest), "Tampered data must fail");

    // Flipped bit in the digest.
    let mut bad = digest;
    bad[0] ^= 0x01;
    assert!(!verify(data, &bad), "Corrupted digest must fail");
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn test_hex_rendering() {
    let digest = hash(b"cryptonight");
    let hex_digest = hash_hex(b"cryptonight");

    assert_eq!(hex_digest.len(), 64);
    assert_eq!(hex_digest, hex::encode(digest));
    assert_eq!(
        hex_digest,
        "12984ed18073faa6728682b6a58639c1154349e407f29b74b24154d0ec511899"
    );
}
