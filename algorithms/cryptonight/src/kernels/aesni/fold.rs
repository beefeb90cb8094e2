//! AES-NI scratchpad folding.

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128, _mm_xor_si128,
};

use crate::kernels::constants::{
    INIT_BLOCKS, INIT_SIZE, ROUNDS, SCRATCHPAD_PASSES, SCRATCHPAD_SIZE, VEC_SIZE,
};
use crate::kernels::scalar::RoundKeys;

/// Folds the scratchpad back into the 128-byte state window.
///
/// Every scratchpad line is XORed into the eight running blocks and
/// sealed with one AES round; the round key rotates per line through the
/// ten-entry schedule.
///
/// # Panics
///
/// Panics when `buf` is not 128 bytes or `scratchpad` is not 2 MiB.
///
/// # Safety
///
/// The CPU must support the `aes` and `sse2` target features. Callers
/// verify this through runtime detection before dispatching here.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn fold(keys: &RoundKeys, buf: &mut [u8], scratchpad: &[u8]) {
    assert_eq!(buf.len(), INIT_SIZE, "fold buffer must be eight AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let rk: [__m128i; ROUNDS] = core::array::from_fn(|r| _mm_loadu_si128(keys[r].as_ptr().cast()));
    let mut blocks: [__m128i; INIT_BLOCKS] =
        core::array::from_fn(|i| _mm_loadu_si128(buf.as_ptr().add(i * VEC_SIZE).cast()));

    let mut src = scratchpad.as_ptr();
    for pass in 0..SCRATCHPAD_PASSES {
        let key = rk[pass % ROUNDS];
        for block in &mut blocks {
            let data = _mm_loadu_si128(src.cast());
            *block = _mm_aesenc_si128(_mm_xor_si128(*block, data), key);
            src = src.add(VEC_SIZE);
        }
    }

    let out = buf.as_mut_ptr();
    for (i, block) in blocks.iter().enumerate() {
        _mm_storeu_si128(out.add(i * VEC_SIZE).cast(), *block);
    }
}
