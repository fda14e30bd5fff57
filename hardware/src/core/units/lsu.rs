//! Load/Store Unit (LSU) Helpers.
//!
//! This module provides the width and extension logic shared by data-memory
//! responders: how many bytes an access moves and how a raw little-endian
//! value is widened to 32 bits for a load.

use crate::common::data::{MemMode, MemWidth};

/// Load/Store Unit (LSU) helpers.
pub struct Lsu;

impl Lsu {
    /// Number of bytes moved by an access in `mode`.
    pub fn store_bytes(mode: MemMode) -> usize {
        mode.width().bytes() as usize
    }

    /// Widens a raw loaded value to 32 bits.
    ///
    /// # Arguments
    ///
    /// * `raw` - Value assembled from memory, in the low bits
    /// * `mode` - Access mode; bit 2 selects zero-extension
    ///
    /// # Returns
    ///
    /// The value sign- or zero-extended from the access width.
    pub fn extend(raw: u32, mode: MemMode) -> u32 {
        match (mode.width(), mode.is_unsigned()) {
            (MemWidth::Byte, false) => raw as u8 as i8 as i32 as u32,
            (MemWidth::Byte, true) => raw & 0xFF,
            (MemWidth::Half, false) => raw as u16 as i16 as i32 as u32,
            (MemWidth::Half, true) => raw & 0xFFFF,
            (MemWidth::Word, _) => raw,
        }
    }
}
