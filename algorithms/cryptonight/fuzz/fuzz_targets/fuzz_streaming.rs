#![no_main]

use cryptonight::{hash, Hasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Chunk size comes from the first byte (1 to 255).
    let chunk_size = data.first().map_or(1, |&b| usize::from(b) % 255 + 1);

    // One-shot digest as the reference.
    let reference = hash(data);

    // Streaming digest over arbitrary small chunks.
    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streaming = hasher.finalize();

    assert_eq!(
        reference, streaming,
        "Streaming and one-shot approaches differ!"
    );
});
