//! Instruction Fetch (IF).
//!
//! Reads the instruction word at the current PC from the fetch responder.

use crate::core::datapath::latches::IfId;
use crate::soc::traits::InstructionMemory;

/// Fetches the instruction at `pc`.
pub fn fetch_stage<M: InstructionMemory + ?Sized>(mem: &mut M, pc: u32) -> IfId {
    let inst = mem.fetch(pc);
    IfId { pc, inst }
}
