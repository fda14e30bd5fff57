//! Memory Access (MEM).
//!
//! Issues the load or store requested by the control word. The effective
//! address is the ALU result; store data is the raw rs2 value.

use crate::core::datapath::latches::{ExMem, MemWb};
use crate::core::datapath::signals::MemOp;
use crate::soc::traits::DataMemory;

/// Performs the data access for one instruction.
pub fn mem_stage<M: DataMemory + ?Sized>(mem: &mut M, ex_mem: &ExMem) -> MemWb {
    let addr = ex_mem.alu.result;
    let load_data = match ex_mem.ctrl.mem_op {
        MemOp::Load => mem.load(addr, ex_mem.ctrl.mem_mode),
        MemOp::Store => {
            mem.store(addr, ex_mem.ctrl.mem_mode, ex_mem.store_data);
            0
        }
        MemOp::None => 0,
    };

    MemWb {
        pc: ex_mem.pc,
        inst: ex_mem.inst,
        decoded: ex_mem.decoded,
        alu_result: ex_mem.alu.result,
        load_data,
        ctrl: ex_mem.ctrl,
        pc_out: ex_mem.pc_out,
    }
}
