//! Program Counter Unit.
//!
//! Computes the next fetch address from the current PC and the control
//! unit's selector. The unit holds no state; the CPU owns the PC register
//! and commits `next_pc` at the end of every cycle.

use crate::core::datapath::signals::PcOp;

/// Inputs to the next-PC computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcInputs {
    /// Reset asserted. Takes precedence over every selector.
    pub reset: bool,
    /// Address loaded while reset is asserted.
    pub boot_addr: u32,
    /// Current PC.
    pub pc: u32,
    /// Selector from the control unit.
    pub pc_op: PcOp,
    /// `pc + imm_b` for the current branch.
    pub branch_target: u32,
    /// `pc + imm_j` for the current jump.
    pub jal_target: u32,
    /// `rs1 + imm_i` from the ALU, before bit 0 is cleared.
    pub jalr_target: u32,
}

/// Outputs of the next-PC computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcOutputs {
    /// Address to commit into the PC register.
    pub next_pc: u32,
    /// Return address for JAL/JALR write-back.
    pub pc_plus4: u32,
}

/// Stateless next-PC logic.
pub struct PcUnit;

impl PcUnit {
    /// Selects the next PC.
    pub fn next(inputs: &PcInputs) -> PcOutputs {
        let pc_plus4 = inputs.pc.wrapping_add(4);
        let next_pc = if inputs.reset {
            inputs.boot_addr
        } else {
            match inputs.pc_op {
                PcOp::Plus4 => pc_plus4,
                PcOp::Branch => inputs.branch_target,
                PcOp::Jal => inputs.jal_target,
                PcOp::Jalr => inputs.jalr_target & !1,
            }
        };
        PcOutputs { next_pc, pc_plus4 }
    }
}
