//! Public API Layer
//!
//! One-call hashing over a fresh engine. Every call here allocates and
//! fills a 2 MiB scratchpad; callers hashing many inputs should reuse a
//! [`crate::Hasher`] instead.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use subtle::ConstantTimeEq;

use crate::engine::CnEngine;
use crate::kernels::constants::HASH_SIZE;
use crate::types::{Backend, BackendError, CnOutput};

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the `CryptoNight` digest of `input`.
///
/// # Example
/// ```rust
/// let digest = cryptonight::hash(b"de omnibus dubitandum");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    hash_full(input).digest
}

/// Compute the digest together with the finalizer that sealed it.
#[must_use]
#[inline]
pub fn hash_full(input: &[u8]) -> CnOutput {
    CnEngine::new().hash_full(input)
}

/// Compute the digest on an explicitly chosen backend.
///
/// # Errors
///
/// Returns [`BackendError`] when the requested backend cannot run on this
/// CPU.
#[inline]
pub fn hash_with_backend(input: &[u8], backend: Backend) -> Result<[u8; HASH_SIZE], BackendError> {
    CnEngine::with_backend(backend).map(|mut engine| engine.hash(input))
}

/// Compute the digest and render it as lowercase hex.
///
/// # Example
/// ```rust
/// let hex = cryptonight::hash_hex(b"de omnibus dubitandum");
/// assert_eq!(
///     hex,
///     "6082027c0ca0d9c5cba17e48328c839b35a20721bbcfed2a7e896611b7506a33"
/// );
/// ```
#[must_use]
pub fn hash_hex(input: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let digest = hash(input);
    let mut out = String::with_capacity(2 * HASH_SIZE);
    for byte in digest {
        out.push(char::from(HEX[(byte >> 4) as usize]));
        out.push(char::from(HEX[(byte & 0x0f) as usize]));
    }
    out
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time (timing attack resistant).
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = cryptonight::hash(data);
/// assert!(cryptonight::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}
