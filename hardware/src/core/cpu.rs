//! CPU state and cycle sequencing.
//!
//! The `Cpu` owns the only state of the datapath, the register file and the
//! PC register, and the memory collaborator it fetches from. A call to
//! [`Cpu::tick`] evaluates every combinational unit once in dependency order
//! and then commits the register write and the next PC together at the
//! clock edge.

use serde::Serialize;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::arch::gpr::{Gpr, NUM_REGS};
use crate::core::datapath::signals::PcOp;
use crate::core::stages;
use crate::core::units::pc::{PcInputs, PcUnit};
use crate::isa::decode::is_supported;
use crate::soc::builder::System;
use crate::soc::traits::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Outcome of [`Cpu::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Cycles executed by this run.
    pub cycles: u64,
    /// PC after the last committed cycle.
    pub final_pc: u32,
    /// The program reached a self-loop before the budget ran out.
    pub halted: bool,
}

/// Serializable view of the architectural state.
#[derive(Clone, Debug, Serialize)]
pub struct CpuSnapshot {
    /// Current PC.
    pub pc: u32,
    /// Register values x0-x31.
    pub regs: [u32; NUM_REGS],
    /// Statistics gathered so far.
    pub stats: SimStats,
}

/// Single-cycle RV32I processor.
pub struct Cpu<M = System> {
    /// Integer register file.
    pub regs: Gpr,
    /// Program counter register.
    pub pc: u32,
    /// Address loaded on reset.
    pub boot_addr: u32,
    /// Log every committed instruction.
    pub trace: bool,
    /// Fail on words outside the supported subset instead of skipping them.
    pub trap_illegal: bool,
    /// Memory collaborator serving fetches and data accesses.
    pub bus: M,
    /// Run statistics.
    pub stats: SimStats,
    halted: bool,
}

impl<M: InstructionMemory + DataMemory> Cpu<M> {
    /// Creates a CPU attached to `bus` and applies reset.
    pub fn new(bus: M, config: &Config) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            pc: 0,
            boot_addr: config.general.boot_addr_val(),
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            trap_illegal: config.general.trap_illegal,
            bus,
            stats: SimStats::default(),
            halted: false,
        };
        cpu.reset();
        cpu
    }

    /// Asserts reset for one edge: the PC takes the boot address.
    ///
    /// Register contents are left untouched.
    pub fn reset(&mut self) {
        let out = PcUnit::next(&PcInputs {
            reset: true,
            boot_addr: self.boot_addr,
            pc: self.pc,
            pc_op: PcOp::Plus4,
            ..PcInputs::default()
        });
        self.pc = out.next_pc;
        self.halted = false;
        tracing::debug!("reset, pc = {:#010x}", self.pc);
    }

    /// Executes one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalInstruction`] without committing any state
    /// when `trap_illegal` is set and the fetched word is not a supported
    /// encoding. Otherwise never fails.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let if_id = stages::fetch::fetch_stage(&mut self.bus, self.pc);

        let supported = is_supported(if_id.inst);
        if !supported && self.trap_illegal {
            return Err(SimError::IllegalInstruction {
                pc: if_id.pc,
                inst: if_id.inst,
            });
        }

        let id_ex = stages::decode::decode_stage(&if_id, &self.regs);
        let ex_mem = stages::execute::execute_stage(&id_ex);
        let mem_wb = stages::memory_access::mem_stage(&mut self.bus, &ex_mem);
        let wb = stages::write_back::wb_stage(&mem_wb);

        // Clock edge.
        self.regs.clock_edge(wb.enable, wb.rd, wb.data);
        let next_pc = mem_wb.pc_out.next_pc;
        self.halted = next_pc == self.pc;
        self.pc = next_pc;

        self.stats.cycles += 1;
        self.stats.retire(
            mem_wb.decoded.op_class,
            mem_wb.decoded.rd,
            supported,
            mem_wb.ctrl.pc_op == PcOp::Branch,
        );

        if self.trace {
            tracing::info!("{}", mem_wb.commit_line(&wb));
        }

        Ok(())
    }

    /// Runs until the program jumps to itself or `max_cycles` cycles elapse.
    pub fn run(&mut self, max_cycles: u64) -> Result<RunSummary, SimError> {
        let mut cycles = 0;
        while cycles < max_cycles && !self.halted {
            self.tick()?;
            cycles += 1;
        }
        if self.halted {
            tracing::debug!("halted on self-loop at {:#010x} after {} cycles", self.pc, cycles);
        } else {
            tracing::debug!("cycle budget of {} exhausted", cycles);
        }
        Ok(RunSummary {
            cycles,
            final_pc: self.pc,
            halted: self.halted,
        })
    }

    /// Whether the last committed cycle left the PC unchanged.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Captures the PC, registers and statistics.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            regs: self.regs.snapshot(),
            stats: self.stats.clone(),
        }
    }

    /// Logs the PC and all registers.
    pub fn dump_state(&self) {
        tracing::info!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }
}
