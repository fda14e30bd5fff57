//! Simulator Configuration.
//!
//! Settings are read from a TOML file. Every field has a default, so a file
//! only needs to name the values it changes, and an empty file is valid.
//! Addresses and sizes are written as hex strings (`"0x1000"`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

const DEFAULT_BOOT_ADDR: u32 = 0x0;
const DEFAULT_RAM_BASE: u32 = 0x0;
const DEFAULT_RAM_SIZE: usize = 0x1_0000;
const DEFAULT_MAX_CYCLES: u64 = 1_000_000;

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// RAM layout.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, [`SimError::ConfigParse`]
    /// if it is not valid TOML for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(text)?)
    }
}

/// Execution settings.
#[derive(Clone, Debug, Deserialize)]
pub struct GeneralConfig {
    /// Log one line per committed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Reset vector.
    #[serde(default = "default_boot_addr")]
    pub boot_addr: String,

    /// Cycle budget for a run.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,

    /// Stop with an error when an unsupported instruction is fetched.
    #[serde(default)]
    pub trap_illegal: bool,
}

impl GeneralConfig {
    /// Reset vector as an address.
    pub fn boot_addr_val(&self) -> u32 {
        parse_hex(&self.boot_addr, DEFAULT_BOOT_ADDR)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            boot_addr: default_boot_addr(),
            max_cycles: default_max_cycles(),
            trap_illegal: false,
        }
    }
}

/// RAM layout.
#[derive(Clone, Debug, Deserialize)]
pub struct MemoryConfig {
    /// First RAM address.
    #[serde(default = "default_ram_base")]
    pub ram_base: String,

    /// RAM size in bytes.
    #[serde(default = "default_ram_size")]
    pub ram_size: String,
}

impl MemoryConfig {
    /// First RAM address.
    pub fn ram_base_val(&self) -> u32 {
        parse_hex(&self.ram_base, DEFAULT_RAM_BASE)
    }

    /// RAM size in bytes.
    pub fn ram_size_val(&self) -> usize {
        let s = self.ram_size.trim_start_matches("0x");
        usize::from_str_radix(s, 16).unwrap_or(DEFAULT_RAM_SIZE)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: default_ram_base(),
            ram_size: default_ram_size(),
        }
    }
}

fn parse_hex(s: &str, default: u32) -> u32 {
    let s = s.trim_start_matches("0x");
    u32::from_str_radix(s, 16).unwrap_or(default)
}

fn default_boot_addr() -> String {
    format!("{:#x}", DEFAULT_BOOT_ADDR)
}

fn default_max_cycles() -> u64 {
    DEFAULT_MAX_CYCLES
}

fn default_ram_base() -> String {
    format!("{:#x}", DEFAULT_RAM_BASE)
}

fn default_ram_size() -> String {
    format!("{:#x}", DEFAULT_RAM_SIZE)
}
