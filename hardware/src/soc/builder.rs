//! System-on-Chip (SoC) Builder.
//!
//! This module defines the `System` structure, the container the CPU talks
//! to for every fetch and data access. It owns the RAM and is wired up from
//! the memory section of the configuration.

use crate::common::data::MemMode;
use crate::common::error::SimError;
use crate::config::Config;
use crate::soc::memory::Memory;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// System-on-Chip (SoC) structure containing all system components.
#[derive(Clone, Debug)]
pub struct System {
    /// Main memory, shared by instruction fetch and data accesses.
    pub ram: Memory,
}

impl System {
    /// Creates a new system instance with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration providing the RAM base address and size
    ///
    /// # Returns
    ///
    /// A new `System` with zero-filled RAM.
    pub fn new(config: &Config) -> Self {
        let ram = Memory::new(config.memory.ram_base_val(), config.memory.ram_size_val());
        tracing::debug!("RAM mapped at {:#010x}, {} bytes", ram.base(), ram.size());
        Self { ram }
    }

    /// Copies a program image into RAM at `addr`.
    pub fn load_image(&mut self, data: &[u8], addr: u32) -> Result<(), SimError> {
        self.ram.write_bytes(addr, data)
    }

    /// Address one past the last RAM byte, used as the initial stack top.
    pub fn ram_end(&self) -> u32 {
        self.ram.base().wrapping_add(self.ram.size() as u32)
    }
}

impl InstructionMemory for System {
    fn fetch(&mut self, pc: u32) -> u32 {
        self.ram.fetch(pc)
    }
}

impl DataMemory for System {
    fn load(&mut self, addr: u32, mode: MemMode) -> u32 {
        self.ram.load(addr, mode)
    }

    fn store(&mut self, addr: u32, mode: MemMode, data: u32) {
        self.ram.store(addr, mode, data);
    }
}
