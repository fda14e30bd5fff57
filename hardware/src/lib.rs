//! RV32I Single-Cycle Datapath Library.
//!
//! This crate models a single-cycle processor for the RV32I base integer
//! instruction set. Each clock cycle fetches one instruction, decodes it,
//! reads the register file, evaluates the ALU, generates control signals,
//! performs at most one data access and commits the register write and the
//! next PC at the clock edge.
//!
//! # Architecture
//!
//! * **Decoder**: instruction word to decoded fields and operation class.
//! * **ALU**: wrapping 32-bit arithmetic, logic, shifts and branch compare.
//! * **Control unit**: per-class control word.
//! * **Register file**: 32 x 32-bit, x0 hardwired to zero.
//! * **PC unit**: stateless next-address selection; the CPU owns the PC.
//! * **Write-back mux**: ALU result, load data or return address.
//!
//! # Modules
//!
//! * `common`: Memory-mode encoding and the error type.
//! * `config`: Configuration loading and parsing.
//! * `core`: The datapath and the CPU that sequences it.
//! * `isa`: Instruction field extraction and decoding.
//! * `sim`: Program image loading.
//! * `soc`: Memory interfaces and RAM.
//! * `stats`: Run statistics.

/// Shared types and error handling.
///
/// Provides the memory-mode encoding used by the decoder, the control unit
/// and memory responders, and the harness error type.
pub mod common;

/// Configuration system for boot address, cycle budget and RAM layout.
pub mod config;

/// CPU core implementation: functional units, control and sequencing.
pub mod core;

/// Instruction Set Architecture definitions and the decoder.
pub mod isa;

/// Simulation harness and binary loaders.
pub mod sim;

/// Memory interfaces and the RAM that implements them.
pub mod soc;

/// Run statistics collection and reporting.
pub mod stats;
