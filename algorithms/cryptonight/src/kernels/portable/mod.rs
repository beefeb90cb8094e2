//! Portable (pure Rust) kernels.
//!
//! Bit-for-bit equivalent to the hardware path on every architecture.
//! Serves as the fallback when AES-NI is unavailable and as the oracle
//! the hardware kernels are validated against.

mod utils;

use crate::kernels::constants::{
    INIT_BLOCKS, INIT_SIZE, MIX_ITERATIONS, ROUNDS, SCRATCHPAD_SIZE, VEC_SIZE,
};
use crate::kernels::scalar::{self, RoundKeys};
use utils::{aesenc, U128};

/// Loads one AES block from the front of a byte slice.
fn load(bytes: &[u8]) -> U128 {
    let mut b = [0u8; VEC_SIZE];
    b.copy_from_slice(&bytes[..VEC_SIZE]);
    U128 { b }
}

/// Fills the scratchpad from the 128-byte expansion seed.
///
/// Eight blocks run ten AES rounds per pass and are written out line by
/// line; each block feeds back into its own next pass, so later lines
/// depend on the whole round history.
///
/// # Panics
///
/// Panics when `seed` is not 128 bytes or `scratchpad` is not 2 MiB.
pub fn expand(keys: &RoundKeys, seed: &[u8], scratchpad: &mut [u8]) {
    assert_eq!(seed.len(), INIT_SIZE, "seed must be eight AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let rk: [U128; ROUNDS] = core::array::from_fn(|r| U128 { b: keys[r] });
    let mut blocks: [U128; INIT_BLOCKS] = core::array::from_fn(|i| load(&seed[i * VEC_SIZE..]));

    for line in scratchpad.chunks_exact_mut(INIT_SIZE) {
        for (block, out) in blocks.iter_mut().zip(line.chunks_exact_mut(VEC_SIZE)) {
            for key in &rk {
                *block = aesenc(*block, *key);
            }
            out.copy_from_slice(&block.b);
        }
    }
}

/// Runs the random walk over the scratchpad.
///
/// The accumulators `a` and `b` start as XOR foldings of the first four
/// state blocks. Each iteration encrypts one scratchpad slot keyed by
/// `a`, then mixes a second slot into `a` through a widening 64-bit
/// multiply, so every step's addresses depend on the previous step's
/// data.
///
/// # Panics
///
/// Panics when `entry` is not 64 bytes or `scratchpad` is not 2 MiB.
pub fn mix(entry: &[u8], scratchpad: &mut [u8]) {
    assert_eq!(entry.len(), 4 * VEC_SIZE, "mix entry must be four AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let mut a = load(entry).xor(&load(&entry[2 * VEC_SIZE..]));
    let mut b = load(&entry[VEC_SIZE..]).xor(&load(&entry[3 * VEC_SIZE..]));

    for _ in 0..MIX_ITERATIONS {
        let addr = scalar::scratchpad_address(a.lo64());
        let c = aesenc(load(&scratchpad[addr..]), a);
        scratchpad[addr..addr + VEC_SIZE].copy_from_slice(&b.xor(&c).b);
        b = c;

        let addr = scalar::scratchpad_address(b.lo64());
        let mem = load(&scratchpad[addr..]);
        let (hi, lo) = scalar::mul128(b.lo64(), mem.lo64());
        // The high product word lands in the low lane.
        let sum = a.add_epi64(&U128::from_u64s(hi, lo));
        scratchpad[addr..addr + VEC_SIZE].copy_from_slice(&sum.b);
        a = sum.xor(&mem);
    }
}

/// Folds the scratchpad back into the 128-byte state window.
///
/// Every scratchpad line is XORed into the eight running blocks and
/// sealed with one AES round; the round key rotates per line through the
/// ten-entry schedule.
///
/// # Panics
///
/// Panics when `buf` is not 128 bytes or `scratchpad` is not 2 MiB.
pub fn fold(keys: &RoundKeys, buf: &mut [u8], scratchpad: &[u8]) {
    assert_eq!(buf.len(), INIT_SIZE, "fold buffer must be eight AES blocks");
    assert_eq!(scratchpad.len(), SCRATCHPAD_SIZE, "scratchpad must be 2 MiB");

    let rk: [U128; ROUNDS] = core::array::from_fn(|r| U128 { b: keys[r] });
    let mut blocks: [U128; INIT_BLOCKS] = core::array::from_fn(|i| load(&buf[i * VEC_SIZE..]));

    for (pass, line) in scratchpad.chunks_exact(INIT_SIZE).enumerate() {
        let key = rk[pass % ROUNDS];
        for (block, data) in blocks.iter_mut().zip(line.chunks_exact(VEC_SIZE)) {
            *block = aesenc(block.xor(&load(data)), key);
        }
    }

    for (block, out) in blocks.iter().zip(buf.chunks_exact_mut(VEC_SIZE)) {
        out.copy_from_slice(&block.b);
    }
}
