//! Simulator error definitions.
//!
//! The datapath itself never faults: unsupported encodings decode to a safe
//! no-op. Errors only arise in the surrounding harness (configuration and
//! image loading) and from the opt-in illegal-instruction hook.

use thiserror::Error;

/// Errors reported by the simulation harness.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading a configuration file or program image failed.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A program image does not fit into RAM at the requested address.
    #[error("image of {len} bytes does not fit in RAM at {addr:#010x}")]
    ImageTooLarge {
        /// Image size in bytes.
        len: usize,
        /// Requested load address.
        addr: u32,
    },

    /// An instruction outside the supported RV32I subset was fetched while
    /// `general.trap_illegal` is enabled.
    #[error("illegal instruction {inst:#010x} at pc {pc:#010x}")]
    IllegalInstruction {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction word.
        inst: u32,
    },
}
