//! RISC-V architectural state.
//!
//! The only architectural state of the datapath besides the program counter
//! is the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
