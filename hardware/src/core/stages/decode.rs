//! Instruction Decode (ID).
//!
//! Decodes the fetched word and reads both source registers. Reads happen
//! before the clock edge, so they observe the values committed by the
//! previous cycle.

use crate::core::arch::gpr::Gpr;
use crate::core::datapath::latches::{IdEx, IfId};
use crate::isa::decode::decode;

/// Decodes `if_id` and performs the register-file reads.
pub fn decode_stage(if_id: &IfId, regs: &Gpr) -> IdEx {
    let decoded = decode(if_id.inst);
    IdEx {
        pc: if_id.pc,
        inst: if_id.inst,
        decoded,
        rv1: regs.read(decoded.rs1),
        rv2: regs.read(decoded.rs2),
    }
}
