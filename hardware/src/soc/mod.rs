//! System-on-Chip components.
//!
//! The memory collaborators of the datapath: the fetch and load/store
//! interfaces, the flat RAM that implements them, and the `System`
//! container built from configuration.

/// System container.
pub mod builder;

/// Flat RAM.
pub mod memory;

/// Memory interfaces used by the datapath.
pub mod traits;

pub use builder::System;
pub use memory::Memory;
pub use traits::{DataMemory, InstructionMemory};
