//! Streaming Hasher
//!
//! Incremental absorption into the Keccak sponge. The sponge sees one
//! contiguous message regardless of how `update` calls slice it, and the
//! expensive scratchpad phases run once, at finalization.

use sha3::{Digest, Keccak256Full};

use crate::engine::CnEngine;
use crate::kernels::constants::{HASH_SIZE, STATE_SIZE};
use crate::types::{Backend, BackendError, CnOutput};

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental hasher with a reusable scratchpad.
///
/// Bytes stream into the Keccak sponge as they arrive; the scratchpad
/// phases run at finalization. Chunk boundaries never change the digest.
pub struct CnHasher {
    /// Sponge holding everything absorbed so far.
    sponge: Keccak256Full,
    /// Engine reused across messages; owns the scratchpad.
    engine: CnEngine,
}

impl CnHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher on the fastest backend for this CPU.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sponge: Keccak256Full::default(),
            engine: CnEngine::new(),
        }
    }

    /// Create a hasher bound to an explicit backend.
    ///
    /// # Errors
    /// Returns [`BackendError`] when the requested backend cannot run on
    /// this CPU.
    pub fn new_with_backend(backend: Backend) -> Result<Self, BackendError> {
        Ok(Self {
            sponge: Keccak256Full::default(),
            engine: CnEngine::with_backend(backend)?,
        })
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.sponge, data);
    }

    /// Finalize and return the digest, consuming the hasher.
    #[must_use]
    pub fn finalize(mut self) -> [u8; HASH_SIZE] {
        self.finish().digest
    }

    /// Finalize and return the digest with its finalizer tag.
    #[must_use]
    pub fn finalize_full(mut self) -> CnOutput {
        self.finish()
    }

    /// Finalize, return the digest, and rearm for the next message.
    ///
    /// Keeps the scratchpad allocation alive, so this is the cheapest way
    /// to hash many messages back to back.
    pub fn finalize_reset(&mut self) -> [u8; HASH_SIZE] {
        self.finish().digest
    }

    /// Like [`finalize_reset`](Self::finalize_reset), but keeps the
    /// finalizer tag alongside the digest.
    pub fn finalize_full_reset(&mut self) -> CnOutput {
        self.finish()
    }

    /// Reset the hasher for reuse, discarding absorbed input.
    pub fn reset(&mut self) {
        Digest::reset(&mut self.sponge);
    }

    /// Drains the sponge and runs the scratchpad phases over its state.
    fn finish(&mut self) -> CnOutput {
        let mut state = [0u8; STATE_SIZE];
        state.copy_from_slice(&self.sponge.finalize_reset());
        self.engine.finish_state(&mut state)
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for CnHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CnHasher {
    fn clone(&self) -> Self {
        // The sponge carries all message state; the clone gets a fresh
        // scratchpad on the same backend.
        Self {
            sponge: self.sponge.clone(),
            engine: CnEngine::with_kernels(self.engine.kernels()),
        }
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for CnHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for CnHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for CnHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for CnHasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let res = self.finalize_reset();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for CnHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for CnHasher {}
