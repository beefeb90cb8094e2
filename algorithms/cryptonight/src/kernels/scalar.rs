//! Integer helpers shared by every backend.
//!
//! The extended key schedule and the mix-phase address and multiply
//! arithmetic are cheap next to the AES block work, so they run as plain
//! integer code and feed whichever kernel executes the rounds. Keeping
//! them here guarantees the hardware and portable backends consume
//! byte-identical round keys.

use crate::kernels::constants::{ADDRESS_MASK, RCON, ROUNDS, SBOX, SCHEDULE_WORDS, VEC_SIZE};

/// The ten 16-byte round keys consumed by the expansion and folding phases.
pub type RoundKeys = [[u8; VEC_SIZE]; ROUNDS];

/// Applies the S-box to each byte of a big-endian schedule word.
fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| SBOX[b as usize]))
}

/// Runs the extended AES-256 key schedule over 32 bytes of sponge state
/// and returns the ten round keys.
///
/// The schedule emits eighty big-endian words, read as ten 32-byte
/// entries; each round key is the first sixteen bytes of one entry. Word
/// `i` mixes word `i - 8` with word `i - 1`, which is rotated and
/// substituted on each entry boundary and substituted again halfway
/// through the entry, with one round constant folded in per entry.
#[must_use]
pub fn expand_round_keys(material: &[u8; 32]) -> RoundKeys {
    let mut words = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in words.iter_mut().zip(material.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 8..SCHEDULE_WORDS {
        let mut t = words[i - 1];
        if i % 8 == 0 {
            t = sub_word(t.rotate_left(8)) ^ (u32::from(RCON[i / 8 - 1]) << 24);
        } else if i % 8 == 4 {
            t = sub_word(t);
        }
        words[i] = words[i - 8] ^ t;
    }

    let mut keys = [[0u8; VEC_SIZE]; ROUNDS];
    for (entry, key) in keys.iter_mut().enumerate() {
        for (slot, chunk) in key.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&words[entry * 8 + slot].to_be_bytes());
        }
    }
    keys
}

/// Derives the scratchpad byte offset addressed by a 64-bit lane.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn scratchpad_address(lane: u64) -> usize {
    (lane & ADDRESS_MASK) as usize
}

/// Full 64x64 multiply, returned as `(high, low)` product words.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn mul128(x: u64, y: u64) -> (u64, u64) {
    let wide = (x as u128).wrapping_mul(y as u128);
    ((wide >> 64) as u64, wide as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // FIPS 197 appendix A.3 key expansion, truncated to the words this
    // schedule shares with the standard (the first eight entries) plus the
    // two extended entries past the standard's end.
    #[test]
    fn round_keys_match_fips_expansion() {
        let material = hex!(
            "603deb1015ca71be2b73aef0857d7781"
            "1f352c073b6108d72d9810a30914dff4"
        );
        let keys = expand_round_keys(&material);
        assert_eq!(keys[0], hex!("603deb1015ca71be2b73aef0857d7781"));
        assert_eq!(keys[7], hex!("fe4890d1e6188d0b046df344706c631e"));
        assert_eq!(keys[8], hex!("991ea3bb7f062eb07b6bddf40b07beea"));
        assert_eq!(keys[9], hex!("e16f0dfb9e69234be502febfee054055"));
    }

    #[test]
    fn schedule_differs_between_entries() {
        let keys = expand_round_keys(&[0u8; 32]);
        for pair in keys.windows(2) {
            assert_ne!(pair[0], pair[1], "adjacent round keys collide");
        }
    }

    #[test]
    fn addresses_stay_masked() {
        assert_eq!(scratchpad_address(0), 0);
        assert_eq!(scratchpad_address(u64::MAX), 0x1F_FFF0);
        assert_eq!(scratchpad_address(0x1234_5678_9abc_def7), 0x1c_def0);
    }

    #[test]
    fn mul128_splits_the_wide_product() {
        assert_eq!(mul128(1, u64::MAX), (0, u64::MAX));
        assert_eq!(mul128(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
        assert_eq!(mul128(0, 0x1234), (0, 0));
    }
}
