//! Simulation harness support.

/// Program image loading.
pub mod loader;
