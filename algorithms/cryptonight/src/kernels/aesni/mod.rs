//! AES-NI Kernel Module
//!
//! Hardware twins of the portable phases, selected at runtime when the
//! CPU reports the `aes` and `sse2` features. Produces byte-identical
//! output to the portable path.

// =============================================================================
// MODULES
// =============================================================================

mod expand;
mod fold;
mod mix;

// =============================================================================
// EXPORTS
// =============================================================================

pub use expand::expand;
pub use fold::fold;
pub use mix::mix;
