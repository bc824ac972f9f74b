//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Run Control:** Steps instructions until `BREAK`, a fault, or the cycle budget.
//! 2. **Loads:** Scalar `LD`, block `LD`, and `LDF` through the operand resolver.
//! 3. **Stack Traffic:** The `PUSH` and `POP` families through the stack engine.
//! 4. **Observability:** Per-instruction tracing and fault logging.

use tracing::{debug, info, trace, warn};

use super::{Cpu, CpuState};
use crate::common::constants::FPR_WIDTH;
use crate::common::error::{Result, VmError};
use crate::core::arch::ring;
use crate::core::units::{OperandResolver, StackEngine};
use crate::isa::{Instruction, Operand, decode};

/// Where a scalar result goes once its value is known.
enum Target {
    Register { start: usize, width: usize },
    Memory(u32),
}

impl Cpu {
    /// Runs from the current program counter until `BREAK`.
    ///
    /// # Errors
    ///
    /// `NotRunnable` once the CPU is `Halted` or `Faulted`; otherwise whatever
    /// fault stops execution, including `CycleLimitExceeded` when the budget
    /// runs out. A CPU left `Running` by `step` continues from its PC.
    pub fn run(&mut self) -> Result<()> {
        if matches!(self.state, CpuState::Halted | CpuState::Faulted) {
            return Err(VmError::NotRunnable { state: self.state });
        }
        debug!(pc = self.regs.pc(), "run started");
        let mut executed: u64 = 0;
        loop {
            if let Some(limit) = self.max_cycles {
                if executed >= limit {
                    return Err(self.fault(VmError::CycleLimitExceeded { limit }));
                }
            }
            if self.step()? == CpuState::Halted {
                return Ok(());
            }
            executed += 1;
        }
    }

    /// Decodes and executes one instruction.
    ///
    /// # Returns
    ///
    /// The state after the instruction: `Halted` after `BREAK`, else `Running`.
    pub fn step(&mut self) -> Result<CpuState> {
        match self.state {
            CpuState::Halted | CpuState::Faulted => {
                return Err(VmError::NotRunnable { state: self.state });
            }
            CpuState::Idle => self.state = CpuState::Running,
            CpuState::Running => {}
        }

        let pc = self.regs.pc();
        let (inst, len) = match decode(&self.program, pc) {
            Ok(decoded) => decoded,
            Err(err) => return Err(self.fault(err)),
        };

        if self.trace {
            info!(pc, op = inst.mnemonic(), ?inst, "execute");
        } else {
            trace!(pc, op = inst.mnemonic(), "execute");
        }

        if let Err(err) = self.execute(&inst, pc) {
            return Err(self.fault(err));
        }

        self.regs.set_pc(pc + len as u32);
        self.stats.instructions_retired += 1;

        if inst == Instruction::Break {
            self.state = CpuState::Halted;
            debug!(
                pc,
                retired = self.stats.instructions_retired,
                "halted on BREAK"
            );
        }
        Ok(self.state)
    }

    /// Moves to `Faulted`, logs the fault, and hands it back.
    fn fault(&mut self, err: VmError) -> VmError {
        self.state = CpuState::Faulted;
        warn!(pc = self.regs.pc(), error = %err, "cpu faulted");
        err
    }

    fn execute(&mut self, inst: &Instruction, pc: u32) -> Result<()> {
        match *inst {
            Instruction::Break => Ok(()),
            Instruction::Ld { dest, src } => self.exec_ld(&dest, &src, pc),
            Instruction::LdBlock {
                dest,
                src,
                count,
                repeat,
            } => self.exec_ld_block(&dest, &src, usize::from(count), usize::from(repeat), pc),
            Instruction::LdFloat { dest, src } => self.exec_ldf(usize::from(dest), &src, pc),
            Instruction::Push { src, width, .. } => self.exec_push(&src, usize::from(width), pc),
            Instruction::PushRange { first, last } => {
                self.exec_push_range(usize::from(first), usize::from(last))
            }
            Instruction::PushFloat { first, last } => {
                self.exec_push_float(usize::from(first), usize::from(last))
            }
            Instruction::Pop { dest, width } => self.exec_pop(&dest, usize::from(width), pc),
            Instruction::PopRange { first, last } => {
                self.exec_pop_range(usize::from(first), usize::from(last))
            }
            Instruction::PopFloat { first, last } => {
                self.exec_pop_float(usize::from(first), usize::from(last))
            }
        }
    }

    fn stack_engine(&mut self) -> StackEngine<'_> {
        StackEngine::new(&mut self.mem, self.regs.sp_mut(), self.stack)
    }

    /// Resolves where a scalar destination lives before anything is written.
    fn target(&self, dest: &Operand, pc: u32) -> Result<Target> {
        match *dest {
            Operand::Register(view) => Ok(Target::Register {
                start: view.start(),
                width: view.width(),
            }),
            _ => OperandResolver::new(&self.regs, &self.mem, pc)
                .resolve_address(dest)
                .map(Target::Memory),
        }
    }

    fn store(&mut self, target: Target, value: u32, width: usize) -> Result<()> {
        match target {
            Target::Register { start, width } => {
                self.regs.set_wide(start, width, value);
                Ok(())
            }
            Target::Memory(addr) => self.mem.set_n(addr, value, width),
        }
    }

    /// `LD dest, src`.
    ///
    /// A register destination takes its own width. A memory destination takes
    /// the source's natural width, or one byte when both sides are memory.
    fn exec_ld(&mut self, dest: &Operand, src: &Operand, pc: u32) -> Result<()> {
        let width = match *dest {
            Operand::Register(view) => view.width(),
            _ => src.natural_width().unwrap_or(1),
        };
        let value = OperandResolver::new(&self.regs, &self.mem, pc).resolve_value(src, width)?;
        let target = self.target(dest, pc)?;
        self.store(target, value, width)?;
        self.stats.inst_ld += 1;
        Ok(())
    }

    /// `LD (dest), src, count, repeat`.
    ///
    /// Writes `repeat` copies of a `count`-byte block as one contiguous run.
    /// Memory sources are copied byte for byte and read in full before the
    /// first write. Value sources contribute their low `count` bytes,
    /// big-endian and zero-extended. An empty block touches nothing.
    fn exec_ld_block(
        &mut self,
        dest: &Operand,
        src: &Operand,
        count: usize,
        repeat: usize,
        pc: u32,
    ) -> Result<()> {
        self.stats.inst_ld_block += 1;
        if count == 0 || repeat == 0 {
            return Ok(());
        }
        let resolver = OperandResolver::new(&self.regs, &self.mem, pc);
        let block = resolver.resolve_block_source(src, count)?.repeat(repeat);
        let addr = resolver.resolve_address(dest)?;
        self.mem.set_range(addr, &block)?;
        self.stats.block_bytes_written += block.len() as u64;
        Ok(())
    }

    /// `LDF fN, src`: four raw bytes into a float register.
    fn exec_ldf(&mut self, dest: usize, src: &Operand, pc: u32) -> Result<()> {
        let bits =
            OperandResolver::new(&self.regs, &self.mem, pc).resolve_value(src, FPR_WIDTH)?;
        self.regs.write_f(dest, bits);
        self.stats.inst_ldf += 1;
        Ok(())
    }

    fn exec_push(&mut self, src: &Operand, width: usize, pc: u32) -> Result<()> {
        let value = OperandResolver::new(&self.regs, &self.mem, pc).resolve_value(src, width)?;
        self.stack_engine().push_value(value, width)?;
        self.stats.inst_push += 1;
        self.stats.bytes_pushed += width as u64;
        Ok(())
    }

    /// Pushes each one-byte register from `first` to `last`, wrapping past `Z`.
    fn exec_push_range(&mut self, first: usize, last: usize) -> Result<()> {
        for idx in ring::range(first, last) {
            let byte = self.regs.get_byte(idx);
            self.stack_engine().push_value(u32::from(byte), 1)?;
            self.stats.bytes_pushed += 1;
        }
        self.stats.inst_push += 1;
        Ok(())
    }

    fn exec_push_float(&mut self, first: usize, last: usize) -> Result<()> {
        for idx in first..=last {
            let bits = self.regs.read_f(idx);
            self.stack_engine().push_value(bits, FPR_WIDTH)?;
            self.stats.bytes_pushed += FPR_WIDTH as u64;
        }
        self.stats.inst_push += 1;
        Ok(())
    }

    fn exec_pop(&mut self, dest: &Operand, width: usize, pc: u32) -> Result<()> {
        let target = self.target(dest, pc)?;
        let value = self.stack_engine().pop_value(width)?;
        self.store(target, value, width)?;
        self.stats.inst_pop += 1;
        self.stats.bytes_popped += width as u64;
        Ok(())
    }

    /// Pops into `last` down to `first`, undoing the matching range push.
    fn exec_pop_range(&mut self, first: usize, last: usize) -> Result<()> {
        let slots: Vec<usize> = ring::range(first, last).collect();
        for &idx in slots.iter().rev() {
            let value = self.stack_engine().pop_value(1)?;
            self.regs.set_byte(idx, value as u8);
            self.stats.bytes_popped += 1;
        }
        self.stats.inst_pop += 1;
        Ok(())
    }

    fn exec_pop_float(&mut self, first: usize, last: usize) -> Result<()> {
        for idx in (first..=last).rev() {
            let bits = self.stack_engine().pop_value(FPR_WIDTH)?;
            self.regs.write_f(idx, bits);
            self.stats.bytes_popped += FPR_WIDTH as u64;
        }
        self.stats.inst_pop += 1;
        Ok(())
    }
}
