//! AES-NI scratchpad expansion.

use core::arch::x86_64::{__m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128};

use crate::kernels::constants::{
    INIT_BLOCKS, INIT_SIZE, ROUNDS, SCRATCHPAD_PASSES, SCRATCHPAD_SIZE, VEC_SIZE,
};
use crate::kernels::scalar::RoundKeys;

/// Fills the scratchpad from the 128-byte expansion seed.
///
/// Eight blocks run ten AES rounds per pass and are written out line by
/// line; each block feeds back into its own next pass.
///
/// # Panics
///
/// Panics when `seed` is not 128 bytes or `scratchpad` is not 2 MiB.
///
/// # Safety
///
/// The CPU must support the `aes` and `sse2` target features. Callers
/// verify this through runtime detection before dispatching here.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn expand(keys: &RoundKeys, seed: &[u8], scratchpad: &mut [u8]) {
    assert_eq!(seed.len(), INIT_SIZE, "seed must be eight AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let rk: [__m128i; ROUNDS] = core::array::from_fn(|r| _mm_loadu_si128(keys[r].as_ptr().cast()));
    let mut blocks: [__m128i; INIT_BLOCKS] =
        core::array::from_fn(|i| _mm_loadu_si128(seed.as_ptr().add(i * VEC_SIZE).cast()));

    let mut out = scratchpad.as_mut_ptr();
    for _ in 0..SCRATCHPAD_PASSES {
        for block in &mut blocks {
            for &key in &rk {
                *block = _mm_aesenc_si128(*block, key);
            }
            _mm_storeu_si128(out.cast(), *block);
            out = out.add(VEC_SIZE);
        }
    }
}
