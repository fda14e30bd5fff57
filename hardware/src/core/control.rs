//! Control Unit.
//!
//! Maps an operation class, the decoder's size/subtype bits and the ALU's
//! branch flags to the control word for the cycle: next-PC selector, memory
//! operation, register write enable and write-back source.

use crate::common::data::MemMode;
use crate::core::datapath::signals::{BranchFlags, ControlWord, MemOp, OpClass, PcOp, WbSel};
use crate::isa::funct3;

/// Combinational control-signal generator.
pub struct ControlUnit;

impl ControlUnit {
    /// Generates the control word for one instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - Operation class from the decoder
    /// * `mem_mode` - Size/subtype bits from the decoder (branch funct3 for
    ///   branches)
    /// * `flags` - Comparator output from the ALU
    pub fn generate(op: OpClass, mem_mode: MemMode, flags: BranchFlags) -> ControlWord {
        let write_alu = ControlWord {
            reg_write: true,
            ..ControlWord::default()
        };
        let link = ControlWord {
            reg_write: true,
            wb_sel: WbSel::Pc4,
            ..ControlWord::default()
        };

        match op {
            OpClass::Alu | OpClass::Lui | OpClass::Auipc => write_alu,
            OpClass::Load => ControlWord {
                mem_op: MemOp::Load,
                mem_mode,
                reg_write: true,
                wb_sel: WbSel::Load,
                ..ControlWord::default()
            },
            OpClass::Store => ControlWord {
                mem_op: MemOp::Store,
                mem_mode: mem_mode.size_only(),
                ..ControlWord::default()
            },
            OpClass::Branch => ControlWord {
                pc_op: if Self::branch_taken(mem_mode.bits() as u32, flags) {
                    PcOp::Branch
                } else {
                    PcOp::Plus4
                },
                ..ControlWord::default()
            },
            OpClass::Jal => ControlWord {
                pc_op: PcOp::Jal,
                ..link
            },
            OpClass::Jalr => ControlWord {
                pc_op: PcOp::Jalr,
                ..link
            },
        }
    }

    /// Same as [`ControlUnit::generate`] but driven by a raw class tag.
    ///
    /// A tag that names no class yields the inert default row: sequential
    /// PC, no memory access and no register write.
    pub fn generate_raw(tag: u8, mem_mode: MemMode, flags: BranchFlags) -> ControlWord {
        match OpClass::from_tag(tag) {
            Some(op) => Self::generate(op, mem_mode, flags),
            None => ControlWord::default(),
        }
    }

    /// Evaluates a branch condition from its funct3 and the comparator flags.
    ///
    /// The reserved subtypes 010 and 011 are never taken.
    pub fn branch_taken(f3: u32, flags: BranchFlags) -> bool {
        match f3 {
            funct3::BEQ => flags.eq,
            funct3::BNE => !flags.eq,
            funct3::BLT => flags.lt_signed,
            funct3::BGE => !flags.lt_signed,
            funct3::BLTU => flags.lt_unsigned,
            funct3::BGEU => !flags.lt_unsigned,
            _ => false,
        }
    }
}
