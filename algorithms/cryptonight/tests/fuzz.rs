//! Bolero Fuzz Tests
//!
//! These tests can be run as property tests via `cargo test`
//! or as full fuzz targets via `cargo bolero test [target_name]`.
//!
//! Only the cheap helpers are exercised here so the property-test mode
//! stays fast; the full pipeline is fuzzed by the cargo-fuzz targets
//! under `fuzz/`.

/// Fuzz test module
#[cfg(test)]
mod fuzz {
    mod absorption;
    mod addressing;
    mod schedule;
}
