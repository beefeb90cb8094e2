//! Portable software implementation of the AES round primitive.

use crate::kernels::constants::{GF_POLY, SBOX, VEC_SIZE};

#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct U128 {
    pub b: [u8; VEC_SIZE],
}

impl U128 {
    pub const fn zero() -> Self {
        Self { b: [0; VEC_SIZE] }
    }

    pub fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut b = [0u8; VEC_SIZE];
        b[0..8].copy_from_slice(&lo.to_le_bytes());
        b[8..16].copy_from_slice(&hi.to_le_bytes());
        Self { b }
    }

    /// The low 64-bit lane, read little-endian.
    pub const fn lo64(&self) -> u64 {
        u64::from_le_bytes([
            self.b[0], self.b[1], self.b[2], self.b[3], self.b[4], self.b[5], self.b[6], self.b[7],
        ])
    }

    pub fn xor(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for (i, res_i) in res.b.iter_mut().enumerate() {
            *res_i = self.b[i] ^ other.b[i];
        }
        res
    }

    pub fn add_epi64(&self, other: &Self) -> Self {
        let a_lo = self.lo64();
        let a_hi = u64::from_le_bytes([
            self.b[8], self.b[9], self.b[10], self.b[11], self.b[12], self.b[13], self.b[14],
            self.b[15],
        ]);
        let b_lo = other.lo64();
        let b_hi = u64::from_le_bytes([
            other.b[8],
            other.b[9],
            other.b[10],
            other.b[11],
            other.b[12],
            other.b[13],
            other.b[14],
            other.b[15],
        ]);

        Self::from_u64s(a_lo.wrapping_add(b_lo), a_hi.wrapping_add(b_hi))
    }
}

/// GF(2^8) multiplication by 2 (used in `MixColumns`).
///
/// Branchless: `b >> 7` extracts the MSB as 0 or 1; multiplying by `GF_POLY`
/// produces the conditional reduction polynomial without a data-dependent branch.
const fn gf_double(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * GF_POLY)
}

/// AES `MixColumns` on a single 4-byte column.
fn mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    c[0] = gf_double(t[0] ^ t[1]) ^ t[1] ^ t[2] ^ t[3];
    c[1] = gf_double(t[1] ^ t[2]) ^ t[2] ^ t[3] ^ t[0];
    c[2] = gf_double(t[2] ^ t[3]) ^ t[3] ^ t[0] ^ t[1];
    c[3] = gf_double(t[3] ^ t[0]) ^ t[0] ^ t[1] ^ t[2];
}

/// One AES encryption round: `SubBytes`, `ShiftRows`, `MixColumns`,
/// `AddRoundKey`. Matches `_mm_aesenc_si128` bit for bit.
pub fn aesenc(state: U128, key: U128) -> U128 {
    let mut s = state.b;

    // SubBytes
    for b in &mut s {
        *b = SBOX[*b as usize];
    }

    // ShiftRows
    // Row 0: No shift
    // Row 1: Shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: Shift left 2
    let tmp1 = s[2];
    let tmp2 = s[6];
    s[2] = s[10];
    s[6] = s[14];
    s[10] = tmp1;
    s[14] = tmp2;
    // Row 3: Shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;

    // MixColumns
    for col in s.chunks_exact_mut(4) {
        mix_column(col);
    }

    // AddRoundKey
    let mut out = U128 { b: s };
    for (b, k) in out.b.iter_mut().zip(key.b.iter()) {
        *b ^= k;
    }
    out
}
