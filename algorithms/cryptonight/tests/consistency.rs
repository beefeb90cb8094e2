//! Consistency & Regression Tests
//!
//! Verifies that every way of feeding the same message produces the same
//! digest, and that the two kernel backends agree.
//! - Streaming vs one-shot consistency
//! - Hasher reuse via finalize_reset and reset
//! - Clone independence
//! - AES-NI vs portable agreement

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use cryptonight::{hash, hash_with_backend, Backend, Hasher};

// Digest of b"This is a test"; anchors the streaming checks without
// recomputing a baseline in every test.
const SENTENCE_HASH: &str = "0c9c7bea7c01308655ddce1aaafe62e0a5f4ed52ecc245dcbfb83b603256be88";
// Digest of b"de omnibus dubitandum".
const MOTTO_HASH: &str = "6082027c0ca0d9c5cba17e48328c839b35a20721bbcfed2a7e896611b7506a33";
// Digest of b"42".
const ANSWER_HASH: &str = "61264740a9b3f7319149aa6ef82e14ec8515f3b6737ac285b69ad16ad255c1bc";

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_matches_oneshot() {
    let input = b"This is a test";

    // Single update.
    let mut hasher = Hasher::new();
    hasher.update(input);
    assert_eq!(
        hex::encode(hasher.finalize()),
        SENTENCE_HASH,
        "single update diverged from one-shot"
    );

    // Split update.
    let mut hasher = Hasher::new();
    hasher.update(&input[..7]);
    hasher.update(&input[7..]);
    assert_eq!(
        hex::encode(hasher.finalize()),
        SENTENCE_HASH,
        "split update diverged from one-shot"
    );

    // Byte-by-byte.
    let mut hasher = Hasher::new();
    for byte in input {
        hasher.update(&[*byte]);
    }
    assert_eq!(
        hex::encode(hasher.finalize()),
        SENTENCE_HASH,
        "byte-by-byte update diverged from one-shot"
    );
}

// =============================================================================
// HASHER REUSE
// =============================================================================

#[test]
fn test_finalize_reset_starts_a_fresh_message() {
    let mut hasher = Hasher::new();

    hasher.update(b"de omnibus dubitandum");
    let first = hasher.finalize_reset();
    assert_eq!(hex::encode(first), MOTTO_HASH, "first message");

    // The second message must not see any trace of the first.
    hasher.update(b"This is a test");
    let second = hasher.finalize_reset();
    assert_eq!(hex::encode(second), SENTENCE_HASH, "second message");
}

#[test]
fn test_reset_discards_buffered_input() {
    let mut hasher = Hasher::new();
    hasher.update(b"garbage that should vanish");
    hasher.reset();

    hasher.update(b"42");
    assert_eq!(hex::encode(hasher.finalize()), ANSWER_HASH);
}

// =============================================================================
// CLONE INDEPENDENCE
// =============================================================================

#[test]
fn test_clone_forks_the_message_state() {
    let mut first = Hasher::new();
    first.update(b"de omnibus ");

    // The clone continues from the same absorbed prefix on its own scratchpad.
    let mut second = first.clone();

    first.update(b"dubitandum");
    second.update(b"dubitandum");

    assert_eq!(hex::encode(first.finalize()), MOTTO_HASH, "original hasher");
    assert_eq!(hex::encode(second.finalize()), MOTTO_HASH, "cloned hasher");
}

// =============================================================================
// BACKEND AGREEMENT
// =============================================================================

#[test]
fn test_backends_agree() {
    let cases: [(&[u8], &str); 2] = [(b"42", ANSWER_HASH), (b"This is a test", SENTENCE_HASH)];

    for (input, expected) in cases {
        let portable = hash_with_backend(input, Backend::Portable).unwrap();
        assert_eq!(hex::encode(portable), expected, "portable backend");

        match hash_with_backend(input, Backend::AesNi) {
            Ok(accelerated) => assert_eq!(
                accelerated, portable,
                "AES-NI and portable kernels disagree"
            ),
            Err(_) => println!("Skipping AES-NI comparison: CPU support missing."),
        }
    }
}

#[test]
fn test_auto_backend_never_fails() {
    let auto = hash_with_backend(b"42", Backend::Auto).unwrap();
    assert_eq!(hex::encode(auto), ANSWER_HASH);
    assert_eq!(hash(b"42"), auto, "hash() must use the auto backend");
}
