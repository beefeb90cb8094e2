//! Backend Dispatcher
//!
//! Resolves a backend request into the fastest kernel set the current
//! CPU can run (AES-NI or portable).

use crate::kernels;
#[cfg(target_arch = "x86_64")]
use crate::kernels::scalar::RoundKeys;
use crate::types::{Backend, BackendError, KernelSet};

// =============================================================================
// KERNEL SETS
// =============================================================================

/// The portable kernel set; available everywhere.
const PORTABLE: KernelSet = KernelSet {
    expand: kernels::portable::expand,
    mix: kernels::portable::mix,
    fold: kernels::portable::fold,
};

/// The AES-NI kernel set; handed out only after CPU feature validation.
#[cfg(target_arch = "x86_64")]
#[allow(dead_code)]
const AESNI: KernelSet = KernelSet {
    expand: aesni_expand,
    mix: aesni_mix,
    fold: aesni_fold,
};

// =============================================================================
// DISPATCHER
// =============================================================================

/// Resolves a backend request into a concrete kernel set.
///
/// # Errors
///
/// Returns [`BackendError`] when the requested backend cannot run on this
/// CPU.
pub fn select(backend: Backend) -> Result<KernelSet, BackendError> {
    match backend {
        Backend::Auto => Ok(auto()),
        Backend::AesNi => aesni_kernels().ok_or_else(|| BackendError::new(Backend::AesNi)),
        Backend::Portable => Ok(PORTABLE),
    }
}

/// Returns the fastest kernel set for this CPU.
#[must_use]
pub fn auto() -> KernelSet {
    aesni_kernels().unwrap_or(PORTABLE)
}

/// Short name of the backend [`auto`] resolves to.
#[must_use]
pub fn active_backend_name() -> &'static str {
    if aesni_kernels().is_some() {
        "aes-ni"
    } else {
        "portable"
    }
}

/// Returns the AES-NI kernel set when the CPU supports it.
fn aesni_kernels() -> Option<KernelSet> {
    // 1. Runtime dispatch (std-only)
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            return Some(AESNI);
        }
    }

    // 2. Compile-time dispatch (no_std)
    #[cfg(all(
        not(feature = "std"),
        target_arch = "x86_64",
        target_feature = "aes",
        target_feature = "sse2"
    ))]
    {
        return Some(AESNI);
    }

    None
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// Safe entry into the AES-NI expansion kernel.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn aesni_expand(keys: &RoundKeys, seed: &[u8], scratchpad: &mut [u8]) {
    // SAFETY: Only reachable after CPUID validation (AES + SSE2).
    unsafe { kernels::aesni::expand(keys, seed, scratchpad) }
}

/// Safe entry into the AES-NI walk kernel.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn aesni_mix(entry: &[u8], scratchpad: &mut [u8]) {
    // SAFETY: Only reachable after CPUID validation (AES + SSE2).
    unsafe { kernels::aesni::mix(entry, scratchpad) }
}

/// Safe entry into the AES-NI folding kernel.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn aesni_fold(keys: &RoundKeys, buf: &mut [u8], scratchpad: &[u8]) {
    // SAFETY: Only reachable after CPUID validation (AES + SSE2).
    unsafe { kernels::aesni::fold(keys, buf, scratchpad) }
}
