//! Shared types used across the library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::HASH_SIZE;
use crate::kernels::scalar::RoundKeys;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Scratchpad expansion entry point: `(round keys, seed, scratchpad)`.
pub type ExpandFn = fn(&RoundKeys, &[u8], &mut [u8]);

/// Scratchpad walk entry point: `(state entry, scratchpad)`.
pub type MixFn = fn(&[u8], &mut [u8]);

/// Scratchpad folding entry point: `(round keys, state window, scratchpad)`.
pub type FoldFn = fn(&RoundKeys, &mut [u8], &[u8]);

/// The three phase functions one backend provides.
///
/// Every backend (AES-NI, portable) implements the same signatures so the
/// dispatcher can swap whole sets at runtime.
#[derive(Clone, Copy, Debug)]
pub struct KernelSet {
    /// Fills the scratchpad from the expansion seed.
    pub expand: ExpandFn,
    /// Runs the random walk over the scratchpad.
    pub mix: MixFn,
    /// Folds the scratchpad back into the state window.
    pub fold: FoldFn,
}

// =============================================================================
// BACKEND SELECTION
// =============================================================================

/// Kernel selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Probe the CPU at runtime and take the fastest available path.
    Auto,
    /// Require the AES-NI path; construction fails where the CPU lacks it.
    AesNi,
    /// Force the portable path regardless of CPU features.
    Portable,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::AesNi => "aes-ni",
            Self::Portable => "portable",
        })
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error returned when a requested backend cannot run on this CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendError {
    requested: Backend,
}

impl BackendError {
    pub(crate) const fn new(requested: Backend) -> Self {
        Self { requested }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backend '{}' requires the aes and sse2 CPU features; \
             select Backend::Auto to fall back to the portable path",
            self.requested
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for BackendError {}

// =============================================================================
// OUTPUT
// =============================================================================

/// The digest algorithm that seals a hash.
///
/// The low two bits of the re-absorbed state's first byte pick one of the
/// four algorithms, so each input commits to its own finalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalizer {
    /// Blake-256.
    Blake,
    /// Groestl-256.
    Groestl,
    /// JH-256.
    Jh,
    /// Skein-256.
    Skein,
}

impl Finalizer {
    /// Selects the finalizer encoded by a state byte.
    #[must_use]
    pub const fn from_state_byte(byte: u8) -> Self {
        match byte & 3 {
            0 => Self::Blake,
            1 => Self::Groestl,
            2 => Self::Jh,
            _ => Self::Skein,
        }
    }

    /// Lower-case algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blake => "blake",
            Self::Groestl => "groestl",
            Self::Jh => "jh",
            Self::Skein => "skein",
        }
    }
}

impl fmt::Display for Finalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finished digest together with the finalizer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CnOutput {
    /// The 32-byte digest.
    pub digest: [u8; HASH_SIZE],
    /// Which algorithm sealed the re-absorbed state.
    pub finalizer: Finalizer,
}
