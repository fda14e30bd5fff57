//! Integration tests for the full datapath.

use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rv32i_datapath::common::data::MemMode;
use rv32i_datapath::common::error::SimError;
use rv32i_datapath::config::Config;
use rv32i_datapath::core::arch::gpr::Gpr;
use rv32i_datapath::core::datapath::latches::IfId;
use rv32i_datapath::core::stages;
use rv32i_datapath::core::Cpu;
use rv32i_datapath::soc::{DataMemory, InstructionMemory};

#[path = "support/asm.rs"]
mod asm;

use asm::*;

mock! {
    pub Bus {}

    impl InstructionMemory for Bus {
        fn fetch(&mut self, pc: u32) -> u32;
    }

    impl DataMemory for Bus {
        fn load(&mut self, addr: u32, mode: MemMode) -> u32;
        fn store(&mut self, addr: u32, mode: MemMode, data: u32);
    }
}

/// Tests that one cycle of `addi x1, x0, 1` writes x1 and advances the PC.
#[test]
fn test_single_addi() {
    let mut cpu = cpu_with(&[0x0010_0093]);
    cpu.tick().expect("tick");
    assert_eq!(cpu.regs.read(1), 1);
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.stats.cycles, 1);
}

/// Tests that `add x1, x0, x1` with x1 = 15 feeds the ALU a = 0, b = 15.
#[test]
fn test_add_operands_from_registers() {
    let mut regs = Gpr::new();
    regs.write(1, 15);

    let if_id = IfId {
        pc: 0,
        inst: add(1, 0, 1),
    };
    let id_ex = stages::decode::decode_stage(&if_id, &regs);
    let ex_mem = stages::execute::execute_stage(&id_ex);

    assert_eq!(id_ex.rv1, 0);
    assert_eq!(ex_mem.alu.b, 15);
    assert_eq!(ex_mem.alu.result, 15);
}

/// Tests that reads in a cycle observe the values from before its edge.
#[test]
fn test_read_before_write_same_cycle() {
    let mut cpu = cpu_with(&[addi(1, 0, 3), add(1, 1, 1), add(1, 1, 1)]);
    cpu.run(3).expect("run");
    assert_eq!(cpu.regs.read(1), 12);
}

/// Tests a counting loop with a backward branch.
#[test]
fn test_sum_loop() {
    let mut cpu = cpu_with(&[
        addi(2, 0, 5),
        add(1, 1, 2),
        addi(2, 2, -1),
        bne(2, 0, -8),
        HALT,
    ]);

    let summary = cpu.run(1000).expect("run");

    assert_eq!(cpu.regs.read(1), 15);
    assert_eq!(cpu.regs.read(2), 0);
    assert!(summary.halted);
    assert_eq!(summary.final_pc, 16);
    assert_eq!(summary.cycles, 17);

    assert_eq!(cpu.stats.instructions_retired, 17);
    assert_eq!(cpu.stats.inst_branch, 5);
    assert_eq!(cpu.stats.branches_taken, 4);
    assert_eq!(cpu.stats.inst_alu, 11);
    assert_eq!(cpu.stats.inst_jump, 1);
}

/// Tests stores and loads of every width through RAM.
#[test]
fn test_memory_program() {
    let mut cpu = cpu_with(&[
        addi(1, 0, 0x100),
        addi(2, 0, -1),
        sw(2, 1, 0),
        lb(3, 1, 0),
        lbu(4, 1, 1),
        lw(5, 1, 0),
        sb(0, 1, 2),
        lw(6, 1, 0),
        HALT,
    ]);

    cpu.run(100).expect("run");

    assert_eq!(cpu.regs.read(3), 0xFFFF_FFFF);
    assert_eq!(cpu.regs.read(4), 0xFF);
    assert_eq!(cpu.regs.read(5), 0xFFFF_FFFF);
    assert_eq!(cpu.regs.read(6), 0xFF00_FFFF);
    assert_eq!(cpu.stats.inst_load, 4);
    assert_eq!(cpu.stats.inst_store, 2);
}

/// Tests a call and return through JAL and JALR.
#[test]
fn test_call_and_return() {
    let mut cpu = cpu_with(&[jal(1, 8), HALT, addi(5, 0, 7), jalr(0, 1, 0)]);

    let summary = cpu.run(100).expect("run");

    assert_eq!(cpu.regs.read(1), 4);
    assert_eq!(cpu.regs.read(5), 7);
    assert_eq!(summary.final_pc, 4);
    assert!(summary.halted);
}

/// Tests that a JALR to an odd address lands on the even address below it.
#[test]
fn test_jalr_clears_bit0() {
    let mut cpu = cpu_with(&[addi(1, 0, 9), jalr(2, 1, 0), HALT]);

    cpu.tick().expect("tick");
    cpu.tick().expect("tick");

    assert_eq!(cpu.pc, 8);
    assert_eq!(cpu.regs.read(2), 8);
}

/// Tests LUI and AUIPC.
#[test]
fn test_upper_immediates() {
    let mut cpu = cpu_with(&[lui(1, 0x1234_5000), auipc(2, 0x1000), addi(1, 1, 0x678)]);

    cpu.run(3).expect("run");

    assert_eq!(cpu.regs.read(1), 0x1234_5678);
    assert_eq!(cpu.regs.read(2), 0x1004);
    assert_eq!(cpu.stats.inst_upper, 2);
}

/// Tests that x0 stays zero when targeted by ALU ops and jumps.
#[test]
fn test_x0_ignores_writes() {
    let mut cpu = cpu_with(&[addi(0, 0, 5), jal(0, 4), add(3, 0, 0)]);

    cpu.run(3).expect("run");

    assert_eq!(cpu.regs.read(0), 0);
    assert_eq!(cpu.regs.read(3), 0);
    assert_eq!(cpu.regs.snapshot()[0], 0);
}

/// Tests that reset loads the boot address and leaves registers alone.
#[test]
fn test_reset_to_boot_address() {
    let mut config = Config::default();
    config.general.boot_addr = "0x100".to_string();

    let mut cpu = cpu_with_config(&[addi(1, 0, 1), addi(1, 1, 1)], &config);
    assert_eq!(cpu.pc, 0x100);

    cpu.run(2).expect("run");
    assert_eq!(cpu.pc, 0x108);
    assert_eq!(cpu.regs.read(1), 2);

    cpu.reset();
    assert_eq!(cpu.pc, 0x100);
    assert_eq!(cpu.regs.read(1), 2);
    assert!(!cpu.is_halted());
}

/// Tests that unsupported words execute as no-ops by default.
#[test]
fn test_unsupported_is_silent_noop() {
    let mut cpu = cpu_with(&[0x3000_1073, r_type(0x01, 2, 2, 0, 1, OP_REG)]);
    cpu.regs.write(1, 99);
    cpu.regs.write(2, 7);

    cpu.run(2).expect("run");

    assert_eq!(cpu.pc, 8);
    assert_eq!(cpu.regs.read(1), 99);
    assert_eq!(cpu.stats.inst_unsupported, 2);
    assert_eq!(cpu.stats.inst_nop, 2);
}

/// Tests the opt-in illegal-instruction hook.
#[test]
fn test_trap_illegal_hook() {
    let mut config = Config::default();
    config.general.trap_illegal = true;

    let mut cpu = cpu_with_config(&[addi(1, 0, 1), 0x3000_1073], &config);

    cpu.tick().expect("first instruction is legal");
    match cpu.tick() {
        Err(SimError::IllegalInstruction { pc, inst }) => {
            assert_eq!(pc, 4);
            assert_eq!(inst, 0x3000_1073);
        }
        other => panic!("expected IllegalInstruction, got {:?}", other),
    }
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.stats.cycles, 1);

    let err = cpu.run(10).expect_err("run stops on the illegal word");
    assert!(matches!(err, SimError::IllegalInstruction { pc: 4, .. }));
}

/// Tests that a run stops when the budget is exhausted.
#[test]
fn test_run_budget() {
    let mut cpu = cpu_with(&[jal(0, 4), jal(0, -4)]);

    let summary = cpu.run(10).expect("run");

    assert_eq!(summary.cycles, 10);
    assert!(!summary.halted);
    assert_eq!(summary.final_pc, 0);
}

/// Tests that tracing every instruction does not change results.
#[test]
fn test_trace_enabled() {
    let mut config = Config::default();
    config.general.trace_instructions = true;

    let mut cpu = cpu_with_config(&[addi(1, 0, 1), sw(1, 0, 0x40), HALT], &config);
    assert!(cpu.trace);

    cpu.run(10).expect("run");
    assert_eq!(cpu.regs.read(1), 1);
    cpu.dump_state();
}

/// Tests that the commit trace line carries the wire encodings.
#[test]
fn test_commit_line_encodings() {
    let mut regs = Gpr::new();
    regs.write(1, 0x100);

    let mut mem = rv32i_datapath::soc::Memory::new(0, 0x200);
    mem.store(0x104, MemMode::WORD, 0xCAFE);

    let if_id = IfId {
        pc: 0x20,
        inst: lw(5, 1, 4),
    };
    let id_ex = stages::decode::decode_stage(&if_id, &regs);
    let ex_mem = stages::execute::execute_stage(&id_ex);
    let mem_wb = stages::memory_access::mem_stage(&mut mem, &ex_mem);
    let wb = stages::write_back::wb_stage(&mem_wb);

    assert_eq!(
        mem_wb.commit_line(&wb),
        "pc=0x00000020 inst=0x0040a283 class=0x08 pc_op=0 mem_op=1 mem_mode=0b010 wb_sel=1 x5 <- 0x0000cafe"
    );
}

/// Tests that the commit line omits the write for instructions without one.
#[test]
fn test_commit_line_without_write() {
    let regs = Gpr::new();
    let if_id = IfId {
        pc: 0,
        inst: beq(0, 0, 8),
    };
    let ex_mem = stages::execute::execute_stage(&stages::decode::decode_stage(&if_id, &regs));
    let mut mem = rv32i_datapath::soc::Memory::new(0, 0x10);
    let mem_wb = stages::memory_access::mem_stage(&mut mem, &ex_mem);
    let wb = stages::write_back::wb_stage(&mem_wb);

    assert_eq!(
        mem_wb.commit_line(&wb),
        "pc=0x00000000 inst=0x00000463 class=0x10 pc_op=1 mem_op=0 mem_mode=0b000 wb_sel=0"
    );
}

/// Tests that reset does not count as an executed cycle.
#[test]
fn test_reset_not_counted_as_cycle() {
    let mut cpu = cpu_with(&[addi(1, 0, 1)]);
    assert_eq!(cpu.stats.cycles, 0);

    cpu.tick().expect("tick");
    cpu.reset();
    assert_eq!(cpu.stats.cycles, 1);
}

/// Tests that a store drives address, mode and rs2 data to the responder.
#[test]
fn test_store_reaches_data_memory() {
    let mut bus = MockBus::new();
    bus.expect_fetch().with(eq(0)).times(1).return_const(sw(2, 1, 4));
    bus.expect_store()
        .with(eq(0x104), eq(MemMode::WORD), eq(0xABCD))
        .times(1)
        .return_const(());
    bus.expect_load().never();

    let mut cpu = Cpu::new(bus, &Config::default());
    cpu.regs.write(1, 0x100);
    cpu.regs.write(2, 0xABCD);

    cpu.tick().expect("tick");
    assert_eq!(cpu.pc, 4);
}

/// Tests that load data from the responder is written back unchanged.
#[test]
fn test_load_uses_responder_value() {
    let mut bus = MockBus::new();
    bus.expect_fetch()
        .with(eq(0))
        .times(1)
        .return_const(i_type(-2, 1, 0b001, 7, OP_LOAD));
    bus.expect_load()
        .with(eq(0x0FE), eq(MemMode::HALF))
        .times(1)
        .return_const(0xFFFF_8000u32);
    bus.expect_store().never();

    let mut cpu = Cpu::new(bus, &Config::default());
    cpu.regs.write(1, 0x100);

    cpu.tick().expect("tick");
    assert_eq!(cpu.regs.read(7), 0xFFFF_8000);
}

/// Tests that non-memory instructions never touch data memory.
#[test]
fn test_alu_ops_skip_data_memory() {
    let mut bus = MockBus::new();
    bus.expect_fetch().times(2).return_const(addi(1, 1, 1));
    bus.expect_load().never();
    bus.expect_store().never();

    let mut cpu = Cpu::new(bus, &Config::default());
    cpu.tick().expect("tick");
    cpu.tick().expect("tick");
    assert_eq!(cpu.regs.read(1), 2);
}

/// Tests the serializable snapshot.
#[test]
fn test_snapshot_serializes() {
    let mut cpu = cpu_with(&[addi(1, 0, 42), HALT]);
    cpu.run(10).expect("run");

    let snap = cpu.snapshot();
    assert_eq!(snap.pc, 4);
    assert_eq!(snap.regs[1], 42);

    let json = serde_json::to_value(&snap).expect("serialize");
    assert_eq!(json["pc"], 4);
    assert_eq!(json["regs"][1], 42);
    assert_eq!(json["stats"]["instructions_retired"], 2);
}
