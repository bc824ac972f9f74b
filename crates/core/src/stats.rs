//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Retired instructions and host time.
//! 2. **Instruction mix:** Counts by family (scalar LD, block LD, LDF, PUSH, POP).
//! 3. **Data movement:** Block bytes written and bytes pushed or popped.

use std::time::Instant;

/// Execution statistics for one CPU since its last reset.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired, including the final `BREAK`.
    pub instructions_retired: u64,

    /// Scalar `LD` instructions retired.
    pub inst_ld: u64,
    /// Block `LD` instructions retired.
    pub inst_ld_block: u64,
    /// `LDF` instructions retired.
    pub inst_ldf: u64,
    /// `PUSH` family instructions retired.
    pub inst_push: u64,
    /// `POP` family instructions retired.
    pub inst_pop: u64,

    /// Bytes written by block transfers.
    pub block_bytes_written: u64,
    /// Bytes pushed onto the data stack.
    pub bytes_pushed: u64,
    /// Bytes popped off the data stack.
    pub bytes_popped: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_ld: 0,
            inst_ld_block: 0,
            inst_ldf: 0,
            inst_push: 0,
            inst_pop: 0,
            block_bytes_written: 0,
            bytes_pushed: 0,
            bytes_popped: 0,
        }
    }
}

/// Section names for selective stats output.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "data"];

impl SimStats {
    /// Prints only the requested statistics sections to stdout.
    ///
    /// Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            let mips = (self.instructions_retired as f64 / seconds) / 1_000_000.0;
            println!("\n==========================================================");
            println!("RINGVM EXECUTION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_mips                 {mips:.2}");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let pct = |n: u64| (n as f64 / instr) * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.ld                  {} ({:.2}%)", self.inst_ld, pct(self.inst_ld));
            println!(
                "  op.ld_block            {} ({:.2}%)",
                self.inst_ld_block,
                pct(self.inst_ld_block)
            );
            println!("  op.ldf                 {} ({:.2}%)", self.inst_ldf, pct(self.inst_ldf));
            println!("  op.push                {} ({:.2}%)", self.inst_push, pct(self.inst_push));
            println!("  op.pop                 {} ({:.2}%)", self.inst_pop, pct(self.inst_pop));
            println!("----------------------------------------------------------");
        }
        if want("data") {
            println!("DATA MOVEMENT");
            println!("  block.bytes_written    {}", self.block_bytes_written);
            println!("  stack.bytes_pushed     {}", self.bytes_pushed);
            println!("  stack.bytes_popped     {}", self.bytes_popped);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
