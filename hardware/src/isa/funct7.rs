//! RV32I function codes (funct7, bits 31-25).

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const ALT: u32 = 0b0100000;

/// Bit within funct7 that selects the alternate operation.
pub const ALT_BIT: u32 = 0b0100000;
