//! Common utilities and types used throughout the datapath simulator.
//!
//! This module provides the memory-access mode encoding shared by the
//! decoder, control unit and memory collaborator, and the harness error type.

/// Memory access width and mode definitions.
pub mod data;

/// Error types reported by the simulation harness.
pub mod error;

pub use data::{MemMode, MemWidth};
pub use error::SimError;
