//! RV32I Instruction Decoder.
//!
//! Converts a 32-bit instruction word into a [`DecodedInstruction`]: register
//! indices, operation class, ALU function and operand-B source, the
//! sign-extended immediate and the raw memory/branch mode bits.
//!
//! Decoding never fails. FENCE, SYSTEM, unknown opcodes and encodings outside
//! the supported subset decode to a safe no-op (an ALU add into x0 with no
//! memory access). [`is_supported`] reports whether a word is a legal RV32I
//! encoding for callers that want to observe such words.

use crate::common::data::MemMode;
use crate::core::datapath::signals::{AluOp, DecodedInstruction, OpClass};
use crate::isa::instruction::InstructionBits;
use crate::isa::{funct3, funct7, opcodes};

/// Decodes one instruction word.
///
/// # Examples
///
/// ```
/// use rv32i_datapath::core::datapath::signals::{AluOp, OpClass};
/// use rv32i_datapath::isa::decode::decode;
///
/// // addi x1, x0, 1
/// let d = decode(0x0010_0093);
/// assert_eq!(d.rd, 1);
/// assert_eq!(d.op_class, OpClass::Alu);
/// assert_eq!(d.alu_func, AluOp::Add);
/// assert!(d.alu_src);
/// assert_eq!(d.imm, 1);
/// ```
pub fn decode(inst: u32) -> DecodedInstruction {
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    let mut d = DecodedInstruction::default();

    match inst.opcode() {
        opcodes::OP_LUI => {
            d.op_class = OpClass::Lui;
            d.rd = inst.rd();
            d.imm = inst.imm_u();
            d.alu_src = true;
        }
        opcodes::OP_AUIPC => {
            d.op_class = OpClass::Auipc;
            d.rd = inst.rd();
            d.imm = inst.imm_u();
            d.alu_src = true;
        }
        opcodes::OP_JAL => {
            d.op_class = OpClass::Jal;
            d.rd = inst.rd();
            d.imm = inst.imm_j();
            d.alu_src = true;
        }
        opcodes::OP_JALR => {
            d.op_class = OpClass::Jalr;
            d.rd = inst.rd();
            d.rs1 = inst.rs1();
            d.imm = inst.imm_i();
            d.alu_src = true;
        }
        opcodes::OP_LOAD => {
            d.op_class = OpClass::Load;
            d.rd = inst.rd();
            d.rs1 = inst.rs1();
            d.imm = inst.imm_i();
            d.mem_mode = MemMode::new(f3);
            d.alu_src = true;
        }
        opcodes::OP_IMM => {
            d.rd = inst.rd();
            d.rs1 = inst.rs1();
            d.imm = inst.imm_i();
            d.alu_src = true;
            d.alu_func = match f3 {
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                funct3::SLL => {
                    d.imm = inst.shamt() as i32;
                    AluOp::Sll
                }
                _ => {
                    d.imm = inst.shamt() as i32;
                    if f7 == funct7::DEFAULT {
                        AluOp::Srl
                    } else {
                        AluOp::Sra
                    }
                }
            };
        }
        opcodes::OP_BRANCH => {
            d.op_class = OpClass::Branch;
            d.rs1 = inst.rs1();
            d.rs2 = inst.rs2();
            d.imm = inst.imm_b();
            d.mem_mode = MemMode::new(f3);
            d.alu_func = AluOp::Sub;
            d.alu_src = true;
        }
        opcodes::OP_STORE => {
            d.op_class = OpClass::Store;
            d.rs1 = inst.rs1();
            d.rs2 = inst.rs2();
            d.imm = inst.imm_s();
            d.mem_mode = MemMode::new(f3).size_only();
            d.alu_src = true;
        }
        // M-extension and malformed funct7 values fall through to the no-op.
        opcodes::OP_REG if f7 == funct7::DEFAULT || f7 == funct7::ALT => {
            let alt = f7 & funct7::ALT_BIT != 0;
            d.rd = inst.rd();
            d.rs1 = inst.rs1();
            d.rs2 = inst.rs2();
            d.alu_func = match f3 {
                funct3::ADD_SUB if alt => AluOp::Sub,
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLL => AluOp::Sll,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::SRL_SRA if alt => AluOp::Sra,
                funct3::SRL_SRA => AluOp::Srl,
                funct3::OR => AluOp::Or,
                _ => AluOp::And,
            };
        }
        _ => {}
    }

    d
}

/// Returns `true` when `inst` is a legal RV32I encoding this datapath
/// implements, including FENCE and the fixed ECALL/EBREAK words, which it
/// executes as no-ops.
pub fn is_supported(inst: u32) -> bool {
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    match inst.opcode() {
        opcodes::OP_LUI | opcodes::OP_AUIPC | opcodes::OP_JAL => true,
        opcodes::OP_JALR => f3 == funct3::JALR,
        opcodes::OP_LOAD => matches!(
            f3,
            funct3::LB | funct3::LH | funct3::LW | funct3::LBU | funct3::LHU
        ),
        opcodes::OP_STORE => matches!(f3, funct3::SB | funct3::SH | funct3::SW),
        opcodes::OP_BRANCH => matches!(
            f3,
            funct3::BEQ | funct3::BNE | funct3::BLT | funct3::BGE | funct3::BLTU | funct3::BGEU
        ),
        opcodes::OP_IMM => match f3 {
            funct3::SLL => f7 == funct7::DEFAULT,
            funct3::SRL_SRA => f7 == funct7::DEFAULT || f7 == funct7::ALT,
            _ => true,
        },
        opcodes::OP_REG => match f7 {
            funct7::DEFAULT => true,
            funct7::ALT => matches!(f3, funct3::ADD_SUB | funct3::SRL_SRA),
            _ => false,
        },
        opcodes::OP_MISC_MEM => f3 == 0,
        // ECALL and EBREAK only; CSR accesses are not implemented.
        opcodes::OP_SYSTEM => inst == 0x0000_0073 || inst == 0x0010_0073,
        _ => false,
    }
}
