//! Instruction encoders and program builders shared by the test files.

#![allow(dead_code)]

use rv32i_datapath::config::Config;
use rv32i_datapath::core::Cpu;
use rv32i_datapath::soc::System;

pub const OP_LUI: u32 = 0x37;
pub const OP_AUIPC: u32 = 0x17;
pub const OP_JAL: u32 = 0x6F;
pub const OP_JALR: u32 = 0x67;
pub const OP_BRANCH: u32 = 0x63;
pub const OP_LOAD: u32 = 0x03;
pub const OP_STORE: u32 = 0x23;
pub const OP_IMM: u32 = 0x13;
pub const OP_REG: u32 = 0x33;

pub fn r_type(f7: u32, rs2: u32, rs1: u32, f3: u32, rd: u32, op: u32) -> u32 {
    f7 << 25 | rs2 << 20 | rs1 << 15 | f3 << 12 | rd << 7 | op
}

pub fn i_type(imm: i32, rs1: u32, f3: u32, rd: u32, op: u32) -> u32 {
    ((imm as u32) & 0xFFF) << 20 | rs1 << 15 | f3 << 12 | rd << 7 | op
}

pub fn s_type(imm: i32, rs2: u32, rs1: u32, f3: u32) -> u32 {
    let imm = imm as u32;
    ((imm >> 5) & 0x7F) << 25 | rs2 << 20 | rs1 << 15 | f3 << 12 | (imm & 0x1F) << 7 | OP_STORE
}

pub fn b_type(imm: i32, rs2: u32, rs1: u32, f3: u32) -> u32 {
    let imm = imm as u32;
    ((imm >> 12) & 1) << 31
        | ((imm >> 5) & 0x3F) << 25
        | rs2 << 20
        | rs1 << 15
        | f3 << 12
        | ((imm >> 1) & 0xF) << 8
        | ((imm >> 11) & 1) << 7
        | OP_BRANCH
}

pub fn u_type(imm: u32, rd: u32, op: u32) -> u32 {
    (imm & 0xFFFF_F000) | rd << 7 | op
}

pub fn j_type(imm: i32, rd: u32) -> u32 {
    let imm = imm as u32;
    ((imm >> 20) & 1) << 31
        | ((imm >> 1) & 0x3FF) << 21
        | ((imm >> 11) & 1) << 20
        | ((imm >> 12) & 0xFF) << 12
        | rd << 7
        | OP_JAL
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b000, rd, OP_IMM)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0, rs2, rs1, 0b000, rd, OP_REG)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x20, rs2, rs1, 0b000, rd, OP_REG)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b010, rd, OP_LOAD)
}

pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b000, rd, OP_LOAD)
}

pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b100, rd, OP_LOAD)
}

pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(imm, rs2, rs1, 0b010)
}

pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(imm, rs2, rs1, 0b000)
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(imm, rs2, rs1, 0b000)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(imm, rs2, rs1, 0b001)
}

pub fn blt(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(imm, rs2, rs1, 0b100)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(imm, rd)
}

pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b000, rd, OP_JALR)
}

pub fn lui(rd: u32, imm: u32) -> u32 {
    u_type(imm, rd, OP_LUI)
}

pub fn auipc(rd: u32, imm: u32) -> u32 {
    u_type(imm, rd, OP_AUIPC)
}

/// `jal x0, 0`: jumps to itself.
pub const HALT: u32 = 0x0000_006F;

/// Builds a CPU with default configuration and `words` loaded at address 0.
pub fn cpu_with(words: &[u32]) -> Cpu {
    cpu_with_config(words, &Config::default())
}

/// Builds a CPU from `config` with `words` loaded at the boot address.
pub fn cpu_with_config(words: &[u32], config: &Config) -> Cpu {
    let mut system = System::new(config);
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    system
        .load_image(&bytes, config.general.boot_addr_val())
        .expect("program fits in RAM");
    Cpu::new(system, config)
}
