//! Check Command
//!
//! Verify digests from file (like sha256sum -c).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::BackendArg;

// =============================================================================
// CHECK
// =============================================================================

fn hash_one(hasher: &mut cryptonight::Hasher, path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; 128 * 1024];

    loop {
        match std::io::Read::read(&mut file, &mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) => return Err(e),
        }
    }

    Ok(hex::encode(hasher.finalize_reset()))
}

/// Verify digests from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, backend: BackendArg) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    // One hasher for the whole run; finalize_reset rearms it per file.
    let mut hasher = cryptonight::Hasher::new_with_backend(backend.into())
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "digest  filename" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        }

        let expected_digest = parts[0].trim();
        let file_path = parts[1].trim();
        total += 1;

        match hash_one(&mut hasher, Path::new(file_path)) {
            Ok(actual_digest) => {
                if actual_digest == expected_digest {
                    println!("{file_path}: OK");
                } else {
                    println!("{file_path}: FAILED");
                    failed += 1;
                }
            }
            Err(e) => {
                // A failed read can leave absorbed bytes behind.
                hasher.reset();
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
