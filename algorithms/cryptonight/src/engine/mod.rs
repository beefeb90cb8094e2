//! Execution Engine
//!
//! Owns the scratchpad and drives the full pipeline: absorb, key
//! schedule, expansion, walk, fold, re-absorb, finalize.

pub mod dispatcher;

pub use dispatcher::active_backend_name;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec;

use sha3::{Digest, Keccak256Full};

use crate::kernels::constants::{
    HASH_SIZE, INIT_OFFSET, INIT_SIZE, SCRATCHPAD_SIZE, STATE_SIZE, VEC_SIZE,
};
use crate::kernels::scalar;
use crate::types::{Backend, BackendError, CnOutput, Finalizer, KernelSet};

// =============================================================================
// ENGINE
// =============================================================================

/// A reusable hashing engine owning one 2 MiB scratchpad.
///
/// The scratchpad allocation dominates setup cost, so callers hashing
/// many inputs should build one engine and reuse it. Every hash rewrites
/// the scratchpad in full; no input data survives between calls.
pub struct CnEngine {
    scratchpad: Box<[u8]>,
    kernels: KernelSet,
}

impl CnEngine {
    /// Creates an engine using the fastest backend for this CPU.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kernels(dispatcher::auto())
    }

    /// Creates an engine bound to an explicit backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the requested backend cannot run on
    /// this CPU.
    pub fn with_backend(backend: Backend) -> Result<Self, BackendError> {
        dispatcher::select(backend).map(Self::with_kernels)
    }

    /// Creates an engine around an already-resolved kernel set.
    pub(crate) fn with_kernels(kernels: KernelSet) -> Self {
        Self {
            scratchpad: vec![0u8; SCRATCHPAD_SIZE].into_boxed_slice(),
            kernels,
        }
    }

    /// The kernel set this engine dispatches to.
    pub(crate) const fn kernels(&self) -> KernelSet {
        self.kernels
    }

    /// Hashes `input` and returns the 32-byte digest.
    pub fn hash(&mut self, input: &[u8]) -> [u8; HASH_SIZE] {
        self.hash_full(input).digest
    }

    /// Hashes `input` and returns the digest with its finalizer tag.
    pub fn hash_full(&mut self, input: &[u8]) -> CnOutput {
        let mut state = absorb(input);
        self.finish_state(&mut state)
    }

    /// Runs the scratchpad phases and finalization over an absorbed state.
    pub(crate) fn finish_state(&mut self, state: &mut [u8; STATE_SIZE]) -> CnOutput {
        let mut material = [0u8; 2 * VEC_SIZE];
        material.copy_from_slice(&state[..2 * VEC_SIZE]);
        let keys = scalar::expand_round_keys(&material);
        (self.kernels.expand)(
            &keys,
            &state[INIT_OFFSET..INIT_OFFSET + INIT_SIZE],
            &mut self.scratchpad,
        );

        (self.kernels.mix)(&state[..4 * VEC_SIZE], &mut self.scratchpad);

        material.copy_from_slice(&state[2 * VEC_SIZE..4 * VEC_SIZE]);
        let keys = scalar::expand_round_keys(&material);
        (self.kernels.fold)(
            &keys,
            &mut state[INIT_OFFSET..INIT_OFFSET + INIT_SIZE],
            &self.scratchpad,
        );

        *state = absorb(&state[..]);
        let finalizer = Finalizer::from_state_byte(state[0]);
        CnOutput {
            digest: final_digest(finalizer, state),
            finalizer,
        }
    }
}

impl Default for CnEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SPONGE AND FINALISTS
// =============================================================================

/// Absorbs input into a full 200-byte Keccak state.
///
/// Keccak-f[1600] with rate 136 and the 0x01 domain pad; the whole
/// untruncated state is the output. The same absorption runs over the raw
/// input and again over the folded state.
#[must_use]
pub fn absorb(input: &[u8]) -> [u8; STATE_SIZE] {
    let mut state = [0u8; STATE_SIZE];
    state.copy_from_slice(&Keccak256Full::digest(input));
    state
}

/// Hashes the full re-absorbed state with the selected finalizer.
fn final_digest(finalizer: Finalizer, state: &[u8; STATE_SIZE]) -> [u8; HASH_SIZE] {
    let mut digest = [0u8; HASH_SIZE];
    match finalizer {
        Finalizer::Blake => {
            use blake_hash::digest::Digest as _;
            digest.copy_from_slice(&blake_hash::Blake256::digest(state));
        }
        Finalizer::Groestl => {
            use groestl::digest::Digest as _;
            digest.copy_from_slice(&groestl::Groestl256::digest(state));
        }
        Finalizer::Jh => {
            use jh::digest::Digest as _;
            digest.copy_from_slice(&jh::Jh256::digest(state));
        }
        Finalizer::Skein => {
            use skein::digest::Digest as _;
            digest.copy_from_slice(&skein::Skein256::<skein::digest::consts::U32>::digest(state));
        }
    }
    digest
}
