//! Instruction Set Architecture definitions.
//!
//! Contains the RV32I opcode and function-code constants, instruction field
//! extraction, and the decoder that turns an instruction word into the
//! datapath's decoded-instruction record.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into [`crate::core::datapath::signals::DecodedInstruction`].
pub mod decode;

/// Instruction field and immediate extraction.
pub mod instruction;

/// `funct3` function codes.
pub mod funct3;

/// `funct7` function codes.
pub mod funct7;

/// Major opcodes.
pub mod opcodes;

pub use decode::{decode, is_supported};
pub use instruction::InstructionBits;
