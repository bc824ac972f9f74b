//! Simulator: the host-facing facade over a CPU.
//!
//! Hosts load memory and bytecode, run to `BREAK`, and then inspect registers,
//! memory, and the data stack through this type without reaching into the
//! executor's internals.

use std::ops::Index;
use std::path::Path;

use crate::common::error::Result;
use crate::config::Config;
use crate::core::units::stack::read_stack;
use crate::core::{Cpu, CpuState};
use crate::sim::loader;
use crate::sim::snapshot::Snapshot;
use crate::stats::SimStats;

/// Top-level simulator owning one CPU.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, memory, program, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// The configuration is taken as already validated, as it is when it
    /// comes from [`Config::default`] or [`Config::from_json`]. Hand-built
    /// configurations should go through [`Simulator::try_new`].
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Validates `config` and creates a simulator from it.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when memory exceeds the address space or the stack
    /// region does not fit inside memory.
    pub fn try_new(config: &Config) -> Result<Self> {
        Ok(Self {
            cpu: Cpu::try_new(config)?,
        })
    }

    /// Validates `config`, creates a simulator, and loads `program` into it.
    pub fn with_program(config: &Config, program: &[u8]) -> Result<Self> {
        let mut sim = Self::try_new(config)?;
        sim.load_program(program)?;
        Ok(sim)
    }

    /// Loads bytecode; the program counter restarts at offset 0.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.cpu.load_program(program)
    }

    /// Loads a bytecode image from disk.
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let program = loader::load_program(path)?;
        self.cpu.load_program(&program)
    }

    /// Copies `bytes` into memory starting at address 0.
    pub fn load_memory(&mut self, bytes: &[u8]) -> Result<()> {
        self.load_memory_at(0, bytes)
    }

    /// Copies `bytes` into memory starting at `addr`.
    pub fn load_memory_at(&mut self, addr: u32, bytes: &[u8]) -> Result<()> {
        self.cpu.mem.load(addr, bytes)
    }

    /// Runs to `BREAK`. See [`Cpu::run`].
    pub fn run(&mut self) -> Result<()> {
        self.cpu.run()
    }

    /// Executes one instruction. See [`Cpu::step`].
    pub fn step(&mut self) -> Result<CpuState> {
        self.cpu.step()
    }

    /// Zeroes registers and returns to `Idle`; memory and program are kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Current run state.
    pub const fn state(&self) -> CpuState {
        self.cpu.state
    }

    /// Reads one ring register.
    pub fn get_byte(&self, idx: usize) -> u8 {
        self.cpu.regs.get_byte(idx)
    }

    /// Reads a wide register view, big-endian.
    pub fn get_wide(&self, start: usize, width: usize) -> u32 {
        self.cpu.regs.get_wide(start, width)
    }

    /// Data-stack pointer.
    pub const fn sp(&self) -> u32 {
        self.cpu.regs.sp()
    }

    /// Call-stack pointer.
    pub const fn call_sp(&self) -> u32 {
        self.cpu.regs.call_sp()
    }

    /// Program counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.regs.pc()
    }

    /// Reads a float register.
    pub fn read_f32(&self, idx: usize) -> f32 {
        self.cpu.regs.read_f32(idx)
    }

    /// Reads a float register as raw bits.
    pub fn read_f_bits(&self, idx: usize) -> u32 {
        self.cpu.regs.read_f(idx)
    }

    /// Reads `width` bytes of memory big-endian.
    pub fn get_n(&self, addr: u32, width: usize) -> Result<u32> {
        self.cpu.mem.get_n(addr, width)
    }

    /// Borrows `len` bytes of memory.
    pub fn get_range(&self, addr: u32, len: usize) -> Result<&[u8]> {
        self.cpu.mem.get_range(addr, len)
    }

    /// Reads `width` bytes big-endian at `offset` into the data stack.
    pub fn read_stack(&self, offset: u32, width: usize) -> Result<u32> {
        read_stack(&self.cpu.mem, self.cpu.stack, offset, width)
    }

    /// Captures the observable machine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu)
    }

    /// Statistics since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}

impl Index<usize> for Simulator {
    type Output = u8;

    fn index(&self, addr: usize) -> &u8 {
        &self.cpu.mem[addr]
    }
}
