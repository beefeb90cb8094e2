//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon. Each worker keeps
//! one hasher alive so the 2 MiB scratchpad is allocated per thread, not per
//! file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum BackendArg {
    /// Fastest kernel set available on this CPU
    Auto,
    /// Hardware AES (fails when the CPU lacks AES-NI)
    AesNi,
    /// Software kernels, available everywhere
    Portable,
}

impl From<BackendArg> for cryptonight::Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => Self::Auto,
            BackendArg::AesNi => Self::AesNi,
            BackendArg::Portable => Self::Portable,
        }
    }
}

/// Output formatting options for the hash command.
#[derive(Copy, Clone)]
pub struct HashOptions {
    pub backend: BackendArg,
    pub tag: bool,
    pub show_finalizer: bool,
}

fn format_line(path: &Path, out: &cryptonight::CnOutput, opts: HashOptions) -> String {
    let hex_digest = hex::encode(out.digest);
    let mut line = if opts.tag {
        format!("CryptoNight ({}) = {}", path.display(), hex_digest)
    } else {
        format!("{}  {}", hex_digest, path.display())
    };
    if opts.show_finalizer {
        line.push_str(&format!(" [{}]", out.finalizer));
    }
    line
}

fn hash_file(hasher: &mut cryptonight::Hasher, path: &Path) -> Result<cryptonight::CnOutput> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut buffer = [0u8; 128 * 1024]; // 128 KB buffer

    loop {
        let n = std::io::Read::read(&mut file, &mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize_full_reset())
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], opts: HashOptions) -> Result<()> {
    // Surface an unsupported backend once, before any worker starts.
    let backend = cryptonight::Backend::from(opts.backend);
    cryptonight::Hasher::new_with_backend(backend).map_err(|e| anyhow::anyhow!("{e}"))?;

    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each_init(
        || cryptonight::Hasher::new_with_backend(backend).unwrap(),
        |hasher, file_path| match hash_file(hasher, file_path) {
            Ok(out) => {
                results.lock().unwrap().push((file_path.clone(), out));
            }
            Err(e) => {
                // Drop any partially absorbed input before the next file.
                hasher.reset();
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        },
    );

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, out) in results {
        println!("{}", format_line(&file_path, &out, opts));
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
