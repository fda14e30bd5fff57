//! RV32I General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. Reads are
//! combinational; the single write port commits at the clock edge, so reads
//! made earlier in the same cycle observe the old value. Register x0 is
//! hardwired to zero: writes to it are discarded and reads of it always
//! return 0 regardless of storage.

use crate::isa::abi;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers (x0-x31) of 32 bits each.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// Register x0 (index 0) always returns 0 regardless of storage.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register x0 (index 0) are silently ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Synchronous write port, applied once per clock edge.
    ///
    /// # Arguments
    ///
    /// * `enable` - Write enable from the control unit
    /// * `rd` - Destination register index from the decoder
    /// * `data` - Write data from the write-back mux
    pub fn clock_edge(&mut self, enable: bool, rd: usize, data: u32) {
        if enable {
            self.write(rd, data);
        }
    }

    /// Returns a copy of all 32 register values, with x0 reported as 0.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Logs the contents of all registers, two per line, with ABI names.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            tracing::info!(
                "x{:<2} ({:>4}) = {:#010x}   x{:<2} ({:>4}) = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            );
        }
    }
}
