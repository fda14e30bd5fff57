//! Instruction field extraction.
//!
//! Provides bit extraction for the fixed-position RV32I fields and the five
//! immediate layouts (I, S, B, U, J) plus the 5-bit shift amount.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for the U-format immediate (bits 12-31, in place).
pub const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Sign-extends the low `bits` bits of `value` to a full 32-bit signed value.
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// I-format immediate: bits[31:20], sign-extended from bit 11.
    fn imm_i(&self) -> i32;

    /// S-format immediate: bits {31:25, 11:7}, sign-extended from bit 11.
    fn imm_s(&self) -> i32;

    /// B-format immediate: bits {31, 7, 30:25, 11:8} << 1, sign-extended
    /// from bit 12. Always even.
    fn imm_b(&self) -> i32;

    /// U-format immediate: bits[31:12] in place, low 12 bits zero.
    fn imm_u(&self) -> i32;

    /// J-format immediate: bits {31, 19:12, 20, 30:21} << 1, sign-extended
    /// from bit 20. Always even.
    fn imm_j(&self) -> i32;

    /// Unsigned 5-bit shift amount from bits[24:20].
    fn shamt(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn imm_i(&self) -> i32 {
        (*self as i32) >> 20
    }

    #[inline(always)]
    fn imm_s(&self) -> i32 {
        let raw = ((self >> 25) & 0x7F) << 5 | ((self >> 7) & 0x1F);
        sign_extend(raw, 12)
    }

    #[inline(always)]
    fn imm_b(&self) -> i32 {
        let raw = ((self >> 31) & 0x1) << 12
            | ((self >> 7) & 0x1) << 11
            | ((self >> 25) & 0x3F) << 5
            | ((self >> 8) & 0xF) << 1;
        sign_extend(raw, 13)
    }

    #[inline(always)]
    fn imm_u(&self) -> i32 {
        (self & U_IMM_MASK) as i32
    }

    #[inline(always)]
    fn imm_j(&self) -> i32 {
        let raw = ((self >> 31) & 0x1) << 20
            | ((self >> 12) & 0xFF) << 12
            | ((self >> 20) & 0x1) << 11
            | ((self >> 21) & 0x3FF) << 1;
        sign_extend(raw, 21)
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & REG_MASK
    }
}
