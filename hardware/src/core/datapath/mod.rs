//! Datapath signal definitions.
//!
//! Contains the shared signal types and the per-cycle bundles passed
//! between the steps of a cycle.

/// Per-cycle signal bundles.
pub mod latches;

/// Control signals and operation types.
pub mod signals;
