//! AES-NI scratchpad walk.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use core::arch::x86_64::{
    _mm_add_epi64, _mm_aesenc_si128, _mm_cvtsi128_si64, _mm_loadu_si128, _mm_set_epi64x,
    _mm_storeu_si128, _mm_xor_si128,
};

use crate::kernels::constants::{MIX_ITERATIONS, SCRATCHPAD_SIZE, VEC_SIZE};
use crate::kernels::scalar;

/// Runs the random walk over the scratchpad.
///
/// Each iteration encrypts one scratchpad slot keyed by the accumulator
/// `a`, then folds a second slot into `a` through a widening 64-bit
/// multiply. Addresses derive from the low lane of the previous step's
/// data, so the walk cannot be precomputed.
///
/// # Panics
///
/// Panics when `entry` is not 64 bytes or `scratchpad` is not 2 MiB.
///
/// # Safety
///
/// The CPU must support the `aes` and `sse2` target features. Callers
/// verify this through runtime detection before dispatching here.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn mix(entry: &[u8], scratchpad: &mut [u8]) {
    assert_eq!(entry.len(), 4 * VEC_SIZE, "mix entry must be four AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let e0 = _mm_loadu_si128(entry.as_ptr().cast());
    let e1 = _mm_loadu_si128(entry.as_ptr().add(VEC_SIZE).cast());
    let e2 = _mm_loadu_si128(entry.as_ptr().add(2 * VEC_SIZE).cast());
    let e3 = _mm_loadu_si128(entry.as_ptr().add(3 * VEC_SIZE).cast());
    let mut a = _mm_xor_si128(e0, e2);
    let mut b = _mm_xor_si128(e1, e3);

    let base = scratchpad.as_mut_ptr();
    for _ in 0..MIX_ITERATIONS {
        let addr = scalar::scratchpad_address(_mm_cvtsi128_si64(a) as u64);
        let slot = base.add(addr);
        let c = _mm_aesenc_si128(_mm_loadu_si128(slot.cast()), a);
        _mm_storeu_si128(slot.cast(), _mm_xor_si128(b, c));
        b = c;

        let b_lane = _mm_cvtsi128_si64(b) as u64;
        let addr = scalar::scratchpad_address(b_lane);
        let slot = base.add(addr);
        let mem = _mm_loadu_si128(slot.cast());
        let (hi, lo) = scalar::mul128(b_lane, _mm_cvtsi128_si64(mem) as u64);
        // The high product word lands in the low lane.
        let sum = _mm_add_epi64(a, _mm_set_epi64x(lo as i64, hi as i64));
        _mm_storeu_si128(slot.cast(), sum);
        a = _mm_xor_si128(sum, mem);
    }
}
