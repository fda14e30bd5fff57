//! Execute (EX).
//!
//! Runs the ALU, generates the control word from the ALU's branch flags and
//! computes the next PC. Branch and JAL targets are `pc + imm`; the JALR
//! target is the ALU sum `rs1 + imm`, with bit 0 cleared by the PC unit.

use crate::core::control::ControlUnit;
use crate::core::datapath::latches::{ExMem, IdEx};
use crate::core::datapath::signals::OpClass;
use crate::core::units::alu::{Alu, AluInputs};
use crate::core::units::pc::{PcInputs, PcUnit};

/// Evaluates the ALU, control unit and PC unit for one instruction.
pub fn execute_stage(id_ex: &IdEx) -> ExMem {
    let d = &id_ex.decoded;

    // AUIPC adds the immediate to the instruction's own address.
    let a = match d.op_class {
        OpClass::Auipc => id_ex.pc,
        _ => id_ex.rv1,
    };

    let alu = Alu::evaluate(&AluInputs {
        a,
        rs2: id_ex.rv2,
        imm: d.imm,
        alu_src: d.alu_src,
        func: d.alu_func,
    });

    let ctrl = ControlUnit::generate(d.op_class, d.mem_mode, alu.flags);

    let target = id_ex.pc.wrapping_add(d.imm as u32);
    let pc_out = PcUnit::next(&PcInputs {
        reset: false,
        boot_addr: 0,
        pc: id_ex.pc,
        pc_op: ctrl.pc_op,
        branch_target: target,
        jal_target: target,
        jalr_target: alu.result,
    });

    ExMem {
        pc: id_ex.pc,
        inst: id_ex.inst,
        decoded: *d,
        alu,
        ctrl,
        pc_out,
        store_data: id_ex.rv2,
    }
}
