//! Main Memory.
//!
//! This module implements a flat, little-endian RAM window. It serves both
//! instruction fetches and data accesses. Accesses that fall outside the
//! window read as zero and discard writes.

use crate::common::data::MemMode;
use crate::common::error::SimError;
use crate::core::units::lsu::Lsu;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// Flat byte-addressed RAM mapped at `base`.
#[derive(Clone, Debug)]
pub struct Memory {
    base: u32,
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled RAM of `size` bytes starting at `base`.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            base,
            bytes: vec![0; size],
        }
    }

    /// Base address of the RAM window.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Size of the RAM window in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Maps an address range to an offset into the backing buffer.
    fn offset(&self, addr: u32, len: usize) -> Option<usize> {
        let off = addr.checked_sub(self.base)? as usize;
        let end = off.checked_add(len)?;
        (end <= self.bytes.len()).then_some(off)
    }

    /// Copies `data` into RAM starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if any byte would land outside
    /// the RAM window.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), SimError> {
        let off = self
            .offset(addr, data.len())
            .ok_or(SimError::ImageTooLarge {
                len: data.len(),
                addr,
            })?;
        self.bytes[off..off + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Reads `len` bytes (at most 4) as a little-endian value.
    pub fn read_le(&self, addr: u32, len: usize) -> u32 {
        match self.offset(addr, len) {
            Some(off) => self.bytes[off..off + len]
                .iter()
                .rev()
                .fold(0u32, |acc, b| (acc << 8) | *b as u32),
            None => {
                tracing::warn!("{}-byte read at {:#010x} is outside RAM", len, addr);
                0
            }
        }
    }

    /// Writes the low `len` bytes (at most 4) of `val` in little-endian order.
    pub fn write_le(&mut self, addr: u32, len: usize, val: u32) {
        match self.offset(addr, len) {
            Some(off) => {
                let le = val.to_le_bytes();
                self.bytes[off..off + len].copy_from_slice(&le[..len]);
            }
            None => {
                tracing::warn!("{}-byte write at {:#010x} is outside RAM, dropped", len, addr);
            }
        }
    }
}

impl InstructionMemory for Memory {
    fn fetch(&mut self, pc: u32) -> u32 {
        self.read_le(pc, 4)
    }
}

impl DataMemory for Memory {
    fn load(&mut self, addr: u32, mode: MemMode) -> u32 {
        let raw = self.read_le(addr, Lsu::store_bytes(mode));
        Lsu::extend(raw, mode)
    }

    fn store(&mut self, addr: u32, mode: MemMode, data: u32) {
        self.write_le(addr, Lsu::store_bytes(mode), data);
    }
}
