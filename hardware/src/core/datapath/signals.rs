//! Datapath control signals and operation types.
//!
//! This module defines the one canonical type per signal concept that flows
//! between the decoder, ALU, control unit, PC unit and write-back mux.
//! Each enum also carries the numeric encoding used on the signal wires so
//! the instruction trace and the raw-encoding entry points
//! (`ControlUnit::generate_raw`, `WbMux::select_raw`) agree on them.

use serde::Serialize;

use crate::common::data::MemMode;

/// ALU function select.
///
/// Specifies the operation performed by the ALU. `Invalid` produces a zero
/// result and never faults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// Integer addition (wrapping).
    #[default]
    Add,
    /// Integer subtraction (wrapping).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Unrecognised function code.
    Invalid,
}

impl AluOp {
    /// Returns the 4-bit function code.
    pub fn bits(self) -> u8 {
        match self {
            AluOp::Add => 0,
            AluOp::Sub => 1,
            AluOp::And => 2,
            AluOp::Or => 3,
            AluOp::Xor => 4,
            AluOp::Slt => 5,
            AluOp::Sltu => 6,
            AluOp::Sll => 7,
            AluOp::Srl => 8,
            AluOp::Sra => 9,
            AluOp::Invalid => 15,
        }
    }

    /// Maps a 4-bit function code back to an operation.
    ///
    /// Codes that name no operation map to `Invalid`, which the ALU
    /// evaluates to zero.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => AluOp::Add,
            1 => AluOp::Sub,
            2 => AluOp::And,
            3 => AluOp::Or,
            4 => AluOp::Xor,
            5 => AluOp::Slt,
            6 => AluOp::Sltu,
            7 => AluOp::Sll,
            8 => AluOp::Srl,
            9 => AluOp::Sra,
            _ => AluOp::Invalid,
        }
    }
}

/// Decoded operation class.
///
/// The category of an instruction that drives control-signal generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OpClass {
    /// Register-register or register-immediate arithmetic (and the safe no-op).
    #[default]
    Alu,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// Conditional branch.
    Branch,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
}

impl OpClass {
    /// Returns the 6-bit class tag.
    pub fn tag(self) -> u8 {
        match self {
            OpClass::Alu => 0x00,
            OpClass::Load => 0x08,
            OpClass::Branch => 0x10,
            OpClass::Jal => 0x11,
            OpClass::Store => 0x18,
            OpClass::Jalr => 0x21,
            OpClass::Lui => 0x30,
            OpClass::Auipc => 0x31,
        }
    }

    /// Maps a class tag back to a class, or `None` for an unassigned tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(OpClass::Alu),
            0x08 => Some(OpClass::Load),
            0x10 => Some(OpClass::Branch),
            0x11 => Some(OpClass::Jal),
            0x18 => Some(OpClass::Store),
            0x21 => Some(OpClass::Jalr),
            0x30 => Some(OpClass::Lui),
            0x31 => Some(OpClass::Auipc),
            _ => None,
        }
    }
}

/// Next-PC selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PcOp {
    /// Sequential fetch (PC + 4).
    #[default]
    Plus4,
    /// Taken conditional branch.
    Branch,
    /// Direct jump (JAL).
    Jal,
    /// Indirect jump (JALR), bit 0 of the target cleared.
    Jalr,
}

impl PcOp {
    /// Returns the 2-bit selector encoding.
    pub fn bits(self) -> u8 {
        match self {
            PcOp::Plus4 => 0,
            PcOp::Branch => 1,
            PcOp::Jal => 2,
            PcOp::Jalr => 3,
        }
    }

    /// Maps a 2-bit selector to a variant. Only the low two bits are used,
    /// so every encoding names a selector.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => PcOp::Plus4,
            1 => PcOp::Branch,
            2 => PcOp::Jal,
            _ => PcOp::Jalr,
        }
    }
}

/// Memory operation requested from the data-memory collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MemOp {
    /// No memory access.
    #[default]
    None,
    /// Load from memory.
    Load,
    /// Store to memory.
    Store,
}

impl MemOp {
    /// Returns the 2-bit encoding.
    pub fn bits(self) -> u8 {
        match self {
            MemOp::None => 0,
            MemOp::Load => 1,
            MemOp::Store => 2,
        }
    }
}

/// Write-back source select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum WbSel {
    /// ALU result.
    #[default]
    Alu,
    /// Data returned by a load.
    Load,
    /// Return address (PC + 4).
    Pc4,
}

impl WbSel {
    /// Returns the 2-bit encoding.
    pub fn bits(self) -> u8 {
        match self {
            WbSel::Alu => 0,
            WbSel::Load => 1,
            WbSel::Pc4 => 2,
        }
    }

    /// Maps a 2-bit encoding to a source, or `None` for the unused code.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(WbSel::Alu),
            1 => Some(WbSel::Load),
            2 => Some(WbSel::Pc4),
            _ => None,
        }
    }
}

/// Register comparison flags used to resolve conditional branches.
///
/// Always computed from the raw rs1 and rs2 values, never from the ALU's
/// selected operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BranchFlags {
    /// rs1 == rs2.
    pub eq: bool,
    /// rs1 < rs2 as two's-complement values.
    pub lt_signed: bool,
    /// rs1 < rs2 as unsigned values.
    pub lt_unsigned: bool,
}

impl BranchFlags {
    /// Packs the flags as `{bit0: eq, bit1: lt_signed, bit2: lt_unsigned}`.
    pub fn bits(self) -> u8 {
        (self.eq as u8) | (self.lt_signed as u8) << 1 | (self.lt_unsigned as u8) << 2
    }

    /// Unpacks flags from the 3-bit wire encoding.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            eq: bits & 0b001 != 0,
            lt_signed: bits & 0b010 != 0,
            lt_unsigned: bits & 0b100 != 0,
        }
    }
}

/// Output of the decoder for one instruction word.
///
/// Register indices are zero when the instruction format has no such field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodedInstruction {
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Operation class driving the control unit.
    pub op_class: OpClass,
    /// Raw size/subtype field (funct3 for loads and branches, size bits for stores).
    pub mem_mode: MemMode,
    /// ALU function.
    pub alu_func: AluOp,
    /// Operand B source: `true` selects the immediate, `false` selects rs2.
    pub alu_src: bool,
    /// Sign-extended immediate.
    pub imm: i32,
}

/// Control signals generated by the control unit for one cycle.
///
/// `ControlWord::default()` is the no-op row: sequential PC, no memory
/// access, no register write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlWord {
    /// Next-PC selector.
    pub pc_op: PcOp,
    /// Memory operation.
    pub mem_op: MemOp,
    /// Size/subtype forwarded to the data-memory collaborator.
    pub mem_mode: MemMode,
    /// Register-file write enable.
    pub reg_write: bool,
    /// Write-back source.
    pub wb_sel: WbSel,
}
