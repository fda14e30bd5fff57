//! Datapath Functional Units.
//!
//! This module contains the combinational execution units of the datapath.
//! It includes:
//! 1. **ALU:** Integer arithmetic, logic, shifts and the branch comparator.
//! 2. **PC unit:** Next fetch address selection.
//! 3. **Write-back mux:** Destination register source selection.
//! 4. **LSU:** Access width and load extension helpers for memory responders.

/// Arithmetic Logic Unit.
pub mod alu;

/// Load/Store Unit helpers.
pub mod lsu;

/// Program counter unit.
pub mod pc;

/// Write-back multiplexer.
pub mod wb_mux;
