//! Datapath steps.
//!
//! One cycle is the composition fetch, decode, execute, memory access and
//! write-back, evaluated in that order. Each step is a pure function of
//! its input bundle except for the memory collaborators it calls.

/// Instruction decode and register reads.
pub mod decode;

/// ALU, control and next-PC evaluation.
pub mod execute;

/// Instruction fetch.
pub mod fetch;

/// Data memory access.
pub mod memory_access;

/// Write-back source selection.
pub mod write_back;
