//! Per-cycle signal bundles.
//!
//! The datapath is single-cycle: these bundles are not registers but the
//! named wires between the fetch, decode, execute, memory and write-back
//! steps of one cycle. Each step consumes the previous bundle and produces
//! the next one; nothing survives past the clock edge except the register
//! file and the PC.

use crate::core::datapath::signals::{ControlWord, DecodedInstruction};
use crate::core::units::alu::AluOutputs;
use crate::core::units::pc::PcOutputs;

/// Fetch to decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
}

/// Decode to execute.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoder output.
    pub decoded: DecodedInstruction,
    /// Value read from rs1.
    pub rv1: u32,
    /// Value read from rs2.
    pub rv2: u32,
}

/// Execute to memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoder output.
    pub decoded: DecodedInstruction,
    /// ALU result, flags and selected operand B.
    pub alu: AluOutputs,
    /// Control word for the cycle.
    pub ctrl: ControlWord,
    /// Next PC and return address.
    pub pc_out: PcOutputs,
    /// rs2 value, used as store data.
    pub store_data: u32,
}

/// Memory to write-back.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoder output.
    pub decoded: DecodedInstruction,
    /// ALU result.
    pub alu_result: u32,
    /// Data returned by a load, 0 otherwise.
    pub load_data: u32,
    /// Control word for the cycle.
    pub ctrl: ControlWord,
    /// Next PC and return address.
    pub pc_out: PcOutputs,
}

impl MemWb {
    /// Formats the commit of this instruction for the instruction trace.
    ///
    /// Signals are shown in their wire encodings: the class tag, then the
    /// `pc_op`, `mem_op` and `wb_sel` selectors and the `mem_mode` bits.
    pub fn commit_line(&self, wb: &RegWrite) -> String {
        let mut line = format!(
            "pc={:#010x} inst={:#010x} class={:#04x} pc_op={} mem_op={} mem_mode={:#05b} wb_sel={}",
            self.pc,
            self.inst,
            self.decoded.op_class.tag(),
            self.ctrl.pc_op.bits(),
            self.ctrl.mem_op.bits(),
            self.ctrl.mem_mode.bits(),
            self.ctrl.wb_sel.bits(),
        );
        if wb.enable && wb.rd != 0 {
            line.push_str(&format!(" x{} <- {:#010x}", wb.rd, wb.data));
        }
        line
    }
}

/// Register-file write request produced by write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegWrite {
    /// Write enable.
    pub enable: bool,
    /// Destination register.
    pub rd: usize,
    /// Value to write.
    pub data: u32,
}
