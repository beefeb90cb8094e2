#![cfg_attr(not(feature = "std"), no_std)]

//! # CryptoNight
//!
//! Memory-hard hash built around a 2 MiB AES-walked scratchpad, with
//! runtime AES-NI dispatch and a bit-identical portable fallback. The
//! mixed state picks one of four finalists (Blake, Groestl, JH, Skein)
//! to seal every digest.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let hash = cryptonight::hash(b"de omnibus dubitandum");
//!
//! // 2. Constant-time verification
//! let valid = cryptonight::verify(b"de omnibus dubitandum", &hash);
//! assert!(valid);
//!
//! // 3. Streaming (large inputs / unknown length)
//! use cryptonight::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"de omnibus ");
//! hasher.update(b"dubitandum");
//! assert_eq!(hasher.finalize(), hash);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
#[doc(hidden)]
pub mod ffi; // Public for test use only
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
#[doc(hidden)]
pub use engine::absorb; // For test/example use only
pub use oneshot::{hash, hash_full, hash_hex, hash_with_backend, verify};
pub use streaming::CnHasher as Hasher;
pub use types::{Backend, BackendError, CnOutput, Finalizer};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::active_backend_name()
}
