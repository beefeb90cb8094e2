//! CryptoNight Basic Example
//!
//! Minimal usage: `let digest = cryptonight::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"de omnibus dubitandum";
    let out = cryptonight::hash_full(data);

    println!("Data:      {:?}", String::from_utf8_lossy(data));
    println!("Digest:    {}", hex::encode(out.digest));
    println!("Finalizer: {}", out.finalizer);
    println!("Backend:   {}", cryptonight::active_backend());
}
