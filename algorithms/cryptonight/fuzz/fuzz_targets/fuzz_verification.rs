#![no_main]

use cryptonight::{hash, verify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digest = hash(data);

    // Positive case: the digest we just computed must verify.
    assert!(
        verify(data, &digest),
        "verification failed for a valid digest"
    );

    // Negative case: a corrupted digest must fail.
    let mut corrupted = digest;
    corrupted[0] ^= 0xFF;
    assert!(
        !verify(data, &corrupted),
        "verification accepted a corrupted digest"
    );

    // Negative case: extended data must fail against the original digest.
    let mut extended = data.to_vec();
    extended.push(0);
    assert!(
        !verify(&extended, &digest),
        "verification accepted extended data"
    );
});
