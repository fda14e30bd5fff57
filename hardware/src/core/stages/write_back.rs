//! Write Back (WB).
//!
//! Selects the value for the destination register. The write itself is
//! applied by the CPU at the clock edge.

use crate::core::datapath::latches::{MemWb, RegWrite};
use crate::core::units::wb_mux::WbMux;

/// Builds the register-file write request for one instruction.
pub fn wb_stage(mem_wb: &MemWb) -> RegWrite {
    RegWrite {
        enable: mem_wb.ctrl.reg_write,
        rd: mem_wb.decoded.rd,
        data: WbMux::select(
            mem_wb.ctrl.wb_sel,
            mem_wb.alu_result,
            mem_wb.load_data,
            mem_wb.pc_out.pc_plus4,
        ),
    }
}
