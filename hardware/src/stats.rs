//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and instruction counts and the instruction mix by operation
//! class, and prints a summary at the end of a run.

use std::time::Instant;

use serde::Serialize;

use crate::core::datapath::signals::OpClass;

/// Simulation statistics structure.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Clock cycles executed by `tick`. Reset is not counted.
    pub cycles: u64,
    /// Instructions committed.
    pub instructions_retired: u64,

    /// Register and immediate arithmetic that wrote a register.
    pub inst_alu: u64,
    /// Loads.
    pub inst_load: u64,
    /// Stores.
    pub inst_store: u64,
    /// Conditional branches.
    pub inst_branch: u64,
    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// JAL and JALR.
    pub inst_jump: u64,
    /// LUI and AUIPC.
    pub inst_upper: u64,
    /// ALU-class instructions with no architectural effect (rd = x0).
    pub inst_nop: u64,
    /// Words outside the supported subset, executed as no-ops.
    pub inst_unsupported: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
            inst_jump: 0,
            inst_upper: 0,
            inst_nop: 0,
            inst_unsupported: 0,
        }
    }
}

impl SimStats {
    /// Records one committed instruction.
    ///
    /// # Arguments
    ///
    /// * `class` - Operation class from the decoder
    /// * `rd` - Destination register index
    /// * `supported` - Whether the word is a legal encoding
    /// * `taken` - Whether a branch redirected the PC
    pub fn retire(&mut self, class: OpClass, rd: usize, supported: bool, taken: bool) {
        self.instructions_retired += 1;
        if !supported {
            self.inst_unsupported += 1;
        }
        match class {
            OpClass::Alu if rd == 0 => self.inst_nop += 1,
            OpClass::Alu => self.inst_alu += 1,
            OpClass::Load => self.inst_load += 1,
            OpClass::Store => self.inst_store += 1,
            OpClass::Branch => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            OpClass::Jal | OpClass::Jalr => self.inst_jump += 1,
            OpClass::Lui | OpClass::Auipc => self.inst_upper += 1,
        }
    }

    /// Prints a formatted summary of the run.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);

        let cpi = cyc as f64 / instr as f64;
        let khz = (self.cycles as f64 / seconds) / 1000.0;
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;

        println!("\n==========================================================");
        println!("RV32I DATAPATH SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("  op.upper_imm           {} ({:.2}%)", self.inst_upper, pct(self.inst_upper));
        println!("  op.nop                 {} ({:.2}%)", self.inst_nop, pct(self.inst_nop));
        println!("  op.unsupported         {}", self.inst_unsupported);
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        let taken_rate = if self.inst_branch > 0 {
            100.0 * self.branches_taken as f64 / self.inst_branch as f64
        } else {
            0.0
        };
        println!("  br.executed            {}", self.inst_branch);
        println!("  br.taken               {}", self.branches_taken);
        println!("  br.taken_rate          {:.2}%", taken_rate);
        println!("==========================================================");
    }
}
