//! CryptoNight CLI
//!
//! File hashing and checksum verification on the CryptoNight hash.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, BackendArg, HashOptions};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "cryptonight")]
#[command(about = "CryptoNight memory-hard hash with AES-NI dispatch", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Kernel backend to use
    #[arg(short, long, value_enum, default_value_t = BackendArg::Auto)]
    backend: BackendArg,

    /// BSD-style output: `CryptoNight (file) = digest`
    #[arg(short, long)]
    tag: bool,

    /// Show which finalizer each digest selected
    #[arg(short, long)]
    finalizer: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify digests from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.backend)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: cryptonight [FILE]... or cryptonight --help");
                std::process::exit(1);
            }

            let opts = HashOptions {
                backend: cli.backend,
                tag: cli.tag,
                show_finalizer: cli.finalizer,
            };
            hash_files(&cli.files, opts)?;
        }
    }

    Ok(())
}
