//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and the run state.
//! 2. **Memory:** Owns the flat address space and the data-stack placement.
//! 3. **Program Store:** Holds the bytecode the program counter indexes into.
//! 4. **Limits:** Carries the instruction budget and trace switch from the config.

/// Fetch-decode-execute loop and per-instruction semantics.
pub mod execution;

use serde::{Deserialize, Serialize};

use crate::common::RegisterFile;
use crate::common::error::{Result, VmError};
use crate::config::Config;
use crate::core::units::StackRegion;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Lifecycle state of the executor.
///
/// `Idle` after construction and reset, `Running` while instructions retire,
/// `Halted` after `BREAK`, and `Faulted` after any error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuState {
    /// Ready to run.
    Idle,
    /// Executing instructions.
    Running,
    /// Stopped by `BREAK`.
    Halted,
    /// Stopped by a fault.
    Faulted,
}

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu {
    /// Register ring, float bank, and special registers.
    pub regs: RegisterFile,
    /// System memory.
    pub mem: Memory,
    /// Loaded bytecode; the program counter is an offset into it.
    pub program: Vec<u8>,
    /// Current run state.
    pub state: CpuState,
    /// Where the data stack lives in memory.
    pub stack: StackRegion,
    /// Instructions a single `run` may retire; `None` disables the guard.
    pub max_cycles: Option<u64>,
    /// Enable per-instruction `info` tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory layout, cycle budget, and trace switch.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: Memory::new(config.memory.size),
            program: Vec::new(),
            state: CpuState::Idle,
            stack: config.stack_region(),
            max_cycles: config.general.max_cycles,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
        }
    }

    /// Validates `config` before building the CPU.
    ///
    /// # Errors
    ///
    /// Whatever [`Config::validate`] rejects.
    pub fn try_new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Replaces the loaded bytecode and rewinds the program counter.
    ///
    /// The CPU returns to `Idle`; registers other than the PC and memory are
    /// left as they are.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<()> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(VmError::InvalidConfig(format!(
                "program of {} bytes exceeds the 32-bit program counter",
                bytes.len()
            )));
        }
        self.program.clear();
        self.program.extend_from_slice(bytes);
        self.regs.set_pc(0);
        self.state = CpuState::Idle;
        tracing::debug!(bytes = bytes.len(), "program loaded");
        Ok(())
    }

    /// Zeroes every register and returns to `Idle`.
    ///
    /// Memory and the loaded program are kept.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.state = CpuState::Idle;
        self.stats = SimStats::default();
        tracing::debug!("cpu reset");
    }

    /// Dumps the current CPU state (state and registers) to stdout.
    pub fn dump_state(&self) {
        println!("STATE = {:?}", self.state);
        self.regs.dump();
    }
}
