//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the execute step.
//! It selects operand B between the register value and the immediate,
//! evaluates the requested operation with wrapping arithmetic, and produces
//! the register-compare flags used by the control unit to resolve branches.

use crate::core::datapath::signals::{AluOp, BranchFlags};

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Inputs presented to the ALU for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluInputs {
    /// Operand A (rs1 value, or the PC for AUIPC).
    pub a: u32,
    /// Raw rs2 value. Also the right-hand side of the branch comparator.
    pub rs2: u32,
    /// Sign-extended immediate from the decoder.
    pub imm: i32,
    /// Operand B source: `true` selects `imm`, `false` selects `rs2`.
    pub alu_src: bool,
    /// Function to evaluate.
    pub func: AluOp,
}

/// Outputs produced by the ALU for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutputs {
    /// Selected operand B, as seen by the function unit.
    pub b: u32,
    /// Function result.
    pub result: u32,
    /// Comparator flags from raw operand A vs raw rs2.
    pub flags: BranchFlags,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements the RV32I base integer arithmetic, logical, comparison and
/// shift operations.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand; only its low 5 bits are used as a shift amount
    ///
    /// # Returns
    ///
    /// The 32-bit result. Comparisons return 1 or 0. `AluOp::Invalid`
    /// returns 0.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        let shamt = b & SHAMT_MASK;
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            AluOp::Sll => a << shamt,
            AluOp::Srl => a >> shamt,
            AluOp::Sra => ((a as i32) >> shamt) as u32,
            AluOp::Invalid => 0,
        }
    }

    /// Compares two register values for branch resolution.
    pub fn branch_flags(rs1: u32, rs2: u32) -> BranchFlags {
        BranchFlags {
            eq: rs1 == rs2,
            lt_signed: (rs1 as i32) < (rs2 as i32),
            lt_unsigned: rs1 < rs2,
        }
    }

    /// Evaluates the full unit: operand-B mux, function and comparator.
    ///
    /// The flags always compare `a` against the raw `rs2`, even when
    /// `alu_src` routes the immediate into the function unit.
    pub fn evaluate(inputs: &AluInputs) -> AluOutputs {
        let b = if inputs.alu_src {
            inputs.imm as u32
        } else {
            inputs.rs2
        };
        AluOutputs {
            b,
            result: Self::execute(inputs.func, inputs.a, b),
            flags: Self::branch_flags(inputs.a, inputs.rs2),
        }
    }
}
