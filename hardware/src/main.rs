//! RV32I Datapath Simulator CLI.
//!
//! Loads a flat binary into RAM at the boot address and clocks the
//! single-cycle datapath until the program jumps to itself or the cycle
//! budget runs out.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32i_datapath::common::error::SimError;
use rv32i_datapath::config::Config;
use rv32i_datapath::core::Cpu;
use rv32i_datapath::isa::abi;
use rv32i_datapath::sim::loader;
use rv32i_datapath::soc::System;

/// Command-line arguments for the datapath simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV32I Single-Cycle Datapath Simulator")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long, default_value = "hardware/configs/default.toml")]
    config: String,

    /// Flat binary to load at the boot address.
    #[arg(short, long)]
    file: String,

    /// Cycle budget, overriding `general.max_cycles`.
    #[arg(long)]
    cycles: Option<u64>,

    /// Log every committed instruction.
    #[arg(long)]
    trace: bool,

    /// Print the final state as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    let mut config = Config::from_file(&args.config)?;
    if args.trace {
        config.general.trace_instructions = true;
    }
    let max_cycles = args.cycles.unwrap_or(config.general.max_cycles);

    if !args.json {
        println!("Global Configuration");
        println!("--------------------");
        println!("General:");
        println!("  Trace Instructions: {}", config.general.trace_instructions);
        println!("  Boot Address:       {:#010x}", config.general.boot_addr_val());
        println!("  Max Cycles:         {}", max_cycles);
        println!("  Trap Illegal:       {}", config.general.trap_illegal);
        println!("Memory:");
        println!("  RAM Base:           {:#010x}", config.memory.ram_base_val());
        println!("  RAM Size:           {} KB", config.memory.ram_size_val() / 1024);
        println!("--------------------");
    }

    let mut system = System::new(&config);
    let boot = config.general.boot_addr_val();
    let len = loader::load_into(&mut system, &args.file, boot)?;
    if !args.json {
        println!("[Loader] Wrote {} bytes to {:#010x}", len, boot);
    }

    let stack_top = system.ram_end();
    let mut cpu = Cpu::new(system, &config);
    cpu.regs.write(abi::REG_SP, stack_top);

    let result = cpu.run(max_cycles);

    if args.json {
        let out = serde_json::json!({
            "summary": result.as_ref().ok(),
            "error": result.as_ref().err().map(|e| e.to_string()),
            "state": cpu.snapshot(),
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("[!] could not encode state: {}", e),
        }
        return result.map(|_| ());
    }

    match &result {
        Ok(summary) if summary.halted => {
            println!("\n[*] Halted at {:#010x} after {} cycles", summary.final_pc, summary.cycles)
        }
        Ok(summary) => println!("\n[*] Cycle budget of {} exhausted", summary.cycles),
        Err(_) => cpu.dump_state(),
    }
    cpu.stats.print();
    result.map(|_| ())
}
