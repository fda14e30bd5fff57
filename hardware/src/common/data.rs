//! Memory Access Modes.
//!
//! This module defines the canonical encoding of the `mem_mode` signal that
//! the decoder and control unit forward to the data-memory collaborator.
//! Bits[1:0] select the access width and bit 2 selects zero-extension for
//! loads, which is exactly the RV32I load `funct3` field.

use serde::Serialize;

/// Width of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Number of bytes moved by an access of this width.
    pub fn bytes(self) -> u32 {
        match self {
            MemWidth::Byte => 1,
            MemWidth::Half => 2,
            MemWidth::Word => 4,
        }
    }
}

/// 3-bit size/subtype field carried alongside a memory operation.
///
/// For branches the same field carries the branch subtype (funct3); the
/// width accessors are only meaningful for loads and stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemMode(u8);

impl MemMode {
    /// Mask selecting the size bits.
    pub const SIZE_MASK: u8 = 0b011;

    /// Bit selecting zero-extension on loads.
    pub const UNSIGNED_BIT: u8 = 0b100;

    /// Signed byte load / byte store.
    pub const BYTE: MemMode = MemMode(0b000);
    /// Signed half-word load / half-word store.
    pub const HALF: MemMode = MemMode(0b001);
    /// Word load / word store.
    pub const WORD: MemMode = MemMode(0b010);
    /// Zero-extended byte load.
    pub const BYTE_UNSIGNED: MemMode = MemMode(0b100);
    /// Zero-extended half-word load.
    pub const HALF_UNSIGNED: MemMode = MemMode(0b101);

    /// Builds a mode from a raw 3-bit field. Upper bits are discarded.
    pub const fn new(bits: u32) -> Self {
        Self((bits & 0b111) as u8)
    }

    /// Returns the raw 3-bit field.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Keeps only the size bits, as required for stores.
    pub const fn size_only(self) -> Self {
        Self(self.0 & Self::SIZE_MASK)
    }

    /// Access width. The reserved size code `11` is treated as a word.
    pub fn width(self) -> MemWidth {
        match self.0 & Self::SIZE_MASK {
            0b00 => MemWidth::Byte,
            0b01 => MemWidth::Half,
            _ => MemWidth::Word,
        }
    }

    /// Whether a load of this mode is zero-extended.
    pub fn is_unsigned(self) -> bool {
        self.0 & Self::UNSIGNED_BIT != 0
    }
}
