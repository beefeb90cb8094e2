//! # `PractRand` Stream Generator
//!
//! Emits an unbounded stream of chained digests to stdout for external
//! statistical suites. Each 40-byte message is the little-endian round
//! counter followed by the previous digest, so any bias in one output
//! feeds straight into the next input.
//!
//! ```text
//! cn_stream | practrand stdin
//! cn_stream --selftest
//! ```

use std::io::{self, Write};

use anyhow::bail;
use clap::Parser;

/// Chained-digest stream generator for statistical randomness testing.
#[derive(Parser)]
#[command(name = "cn_stream", version)]
struct Args {
    /// Starting value for the round counter.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Check the built-in known-answer vectors and exit.
    #[arg(long)]
    selftest: bool,
}

/// One known-answer vector per finalizer branch.
const VECTORS: &[(&str, &[u8], &str)] = &[
    (
        "blake",
        b"",
        "370a57d3a2ec493074ef27da67d9e2f155dd8ad63340ce8b8053126d61a8442c",
    ),
    (
        "groestl",
        b"0123456789",
        "326486b114db8a4cfc61201ba633146e17a52589db5efcc040dae063f456bf2f",
    ),
    (
        "jh",
        &[0u8],
        "da9986fd23e633a7de6cc324c416b76564ffb3ea702922b798c7ee97dd531fcd",
    ),
    (
        "skein",
        b"cryptonight",
        "12984ed18073faa6728682b6a58639c1154349e407f29b74b24154d0ec511899",
    ),
];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.selftest {
        return selftest();
    }
    stream(args.seed)
}

/// Verify the built-in vectors on whatever backend dispatch picked.
fn selftest() -> anyhow::Result<()> {
    println!("backend: {}", cryptonight::active_backend());

    let mut failures = 0u32;
    for &(finalizer, input, expected) in VECTORS {
        let out = cryptonight::hash_full(input);
        let digest = hex::encode(out.digest);

        if digest == expected && out.finalizer.name() == finalizer {
            println!("OK      {finalizer}");
        } else {
            println!("FAILED  {finalizer} (got {digest} via {})", out.finalizer.name());
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} vectors failed", VECTORS.len());
    }
    println!("all {} vectors passed", VECTORS.len());
    Ok(())
}

/// Pump chained digests into stdout until the consumer closes the pipe.
fn stream(seed: u64) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    // One hasher for the whole run; finalize_reset keeps the scratchpad.
    let mut hasher = cryptonight::Hasher::new();
    let mut previous = [0u8; 32];
    let mut counter = seed;

    loop {
        hasher.update(&counter.to_le_bytes());
        hasher.update(&previous);
        previous = hasher.finalize_reset();

        // The consumer closing the pipe ends the run.
        if handle.write_all(&previous).is_err() {
            return Ok(());
        }

        counter = counter.wrapping_add(1);
    }
}
