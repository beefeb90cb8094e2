//! Kernel implementations.
//!
//! Hardware-specific and portable renditions of the three scratchpad
//! phases, plus the integer helpers they share. All backends produce
//! byte-identical output.

#[cfg(target_arch = "x86_64")]
pub mod aesni;
pub mod constants;
pub mod portable;
pub mod scalar;
