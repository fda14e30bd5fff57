//! CPU core.
//!
//! The single-cycle RV32I datapath: architectural state, functional units,
//! control unit, the steps of a cycle and the `Cpu` that sequences them.

/// Architectural state (register file).
pub mod arch;

/// Control-signal generation.
pub mod control;

/// CPU state and cycle sequencing.
pub mod cpu;

/// Signal types and per-cycle bundles.
pub mod datapath;

/// Steps of one cycle.
pub mod stages;

/// Functional units.
pub mod units;

pub use cpu::{Cpu, RunSummary};
