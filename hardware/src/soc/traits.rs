//! System-on-Chip Traits.
//!
//! This module defines the two narrow interfaces the datapath uses to reach
//! memory: instruction fetch and data load/store. Both complete within the
//! cycle they are invoked and never fail.

use crate::common::data::MemMode;

/// Instruction-fetch responder.
pub trait InstructionMemory {
    /// Returns the 32-bit instruction word at `pc`.
    fn fetch(&mut self, pc: u32) -> u32;
}

/// Data-memory responder.
///
/// The responder performs width selection and sign/zero widening of loads
/// according to `mode`; the datapath uses the returned value unchanged.
pub trait DataMemory {
    /// Reads from `addr` with the access size and extension given by `mode`.
    fn load(&mut self, addr: u32, mode: MemMode) -> u32;

    /// Writes the low bytes of `data` selected by `mode` to `addr`.
    fn store(&mut self, addr: u32, mode: MemMode, data: u32);
}
