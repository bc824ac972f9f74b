//! Bytecode Decoder.
//!
//! This module turns one bytecode record at a program offset into a validated
//! [`Instruction`]. It performs the following:
//! 1. **Field Extraction:** Reads the opcode, operand tags, and big-endian payloads.
//! 2. **Validation:** Rejects unknown opcodes and tags, out-of-range registers and
//!    widths, and operands that are illegal in their position.
//! 3. **Width Resolution:** Makes implicit push/pop widths explicit.
//!
//! A decode fault means the producer emitted bad bytecode; it is never retried.

use super::instruction::Instruction;
use super::opcodes::{self, sized_width};
use super::operand::{OffsetDir, Operand, OperandTag, RegView};
use crate::common::constants::{FPR_COUNT, MAX_REG_WIDTH, RING_SIZE};
use crate::common::error::{Result, VmError};

/// Width of the `repeat` field of a block load.
const REPEAT_FIELD_WIDTH: usize = 2;

/// Cursor over the program bytes of a single instruction.
struct Reader<'a> {
    bytes: &'a [u8],
    pc: u32,
    pos: usize,
}

impl Reader<'_> {
    const fn invalid(&self, reason: &'static str) -> VmError {
        VmError::InvalidOperand {
            pc: self.pc,
            reason,
        }
    }

    fn u8(&mut self) -> Result<u8> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or(VmError::UnexpectedEndOfBytecode { pc: self.pc })?;
        self.pos += 1;
        Ok(b)
    }

    /// Reads an `n`-byte big-endian field, `n <= 4`.
    fn be(&mut self, n: usize) -> Result<u32> {
        let field = self
            .bytes
            .get(self.pos..self.pos + n)
            .ok_or(VmError::UnexpectedEndOfBytecode { pc: self.pc })?;
        self.pos += n;
        Ok(field.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }

    fn ring_index(&mut self) -> Result<u8> {
        let idx = self.u8()?;
        if usize::from(idx) >= RING_SIZE {
            return Err(self.invalid("ring register index out of range"));
        }
        Ok(idx)
    }

    fn float_index(&mut self) -> Result<u8> {
        let idx = self.u8()?;
        if usize::from(idx) >= FPR_COUNT {
            return Err(self.invalid("float register index out of range"));
        }
        Ok(idx)
    }

    fn width(&mut self) -> Result<u8> {
        let width = self.u8()?;
        if !(1..=MAX_REG_WIDTH).contains(&usize::from(width)) {
            return Err(self.invalid("operand width must be 1-4 bytes"));
        }
        Ok(width)
    }

    fn reg_view(&mut self) -> Result<RegView> {
        let start = self.ring_index()?;
        let width = self.width()?;
        Ok(RegView::new(start, width))
    }

    fn dir(&mut self) -> Result<OffsetDir> {
        let b = self.u8()?;
        OffsetDir::from_byte(b).ok_or_else(|| self.invalid("offset direction must be 0 or 1"))
    }

    fn operand(&mut self) -> Result<Operand> {
        let tag_byte = self.u8()?;
        let tag = OperandTag::try_from(tag_byte).map_err(|_| VmError::InvalidAddressingMode {
            tag: tag_byte,
            pc: self.pc,
        })?;
        let op = match tag {
            OperandTag::Immediate => {
                let width = self.width()?;
                let value = self.be(usize::from(width))?;
                Operand::Immediate { value, width }
            }
            OperandTag::Register => Operand::Register(self.reg_view()?),
            OperandTag::Absolute => Operand::Absolute(self.be(4)?),
            OperandTag::AbsoluteConstOffset => {
                let addr = self.be(4)?;
                let dir = self.dir()?;
                let k = self.be(4)?;
                Operand::AbsoluteConstOffset { addr, dir, k }
            }
            OperandTag::AbsoluteRegOffset => {
                let addr = self.be(4)?;
                let dir = self.dir()?;
                let offset = self.reg_view()?;
                Operand::AbsoluteRegOffset { addr, dir, offset }
            }
            OperandTag::Indirect => Operand::Indirect(self.reg_view()?),
            OperandTag::IndirectConstOffset => {
                let base = self.reg_view()?;
                let dir = self.dir()?;
                let k = self.be(4)?;
                Operand::IndirectConstOffset { base, dir, k }
            }
            OperandTag::IndirectRegOffset => {
                let base = self.reg_view()?;
                let dir = self.dir()?;
                let offset = self.reg_view()?;
                Operand::IndirectRegOffset { base, dir, offset }
            }
        };
        Ok(op)
    }

    fn float_range(&mut self) -> Result<(u8, u8)> {
        let first = self.float_index()?;
        let last = self.float_index()?;
        if first > last {
            return Err(self.invalid("float range must ascend"));
        }
        Ok((first, last))
    }
}

/// Decodes the instruction at `pc`.
///
/// # Returns
///
/// The instruction and its encoded length in bytes.
pub fn decode(program: &[u8], pc: u32) -> Result<(Instruction, usize)> {
    let start = usize::try_from(pc).map_err(|_| VmError::UnexpectedEndOfBytecode { pc })?;
    let mut r = Reader {
        bytes: program,
        pc,
        pos: start,
    };

    let opcode = r.u8()?;
    let inst = match opcode {
        opcodes::OP_BREAK => Instruction::Break,
        opcodes::OP_LD => {
            let dest = r.operand()?;
            if matches!(dest, Operand::Immediate { .. }) {
                return Err(r.invalid("LD destination cannot be an immediate"));
            }
            let src = r.operand()?;
            Instruction::Ld { dest, src }
        }
        opcodes::OP_LD_BLOCK => {
            let dest = r.operand()?;
            if !dest.is_memory() {
                return Err(r.invalid("block destination must be a memory operand"));
            }
            let src = r.operand()?;
            let count = r.u8()?;
            let repeat = r.be(REPEAT_FIELD_WIDTH)? as u16;
            Instruction::LdBlock {
                dest,
                src,
                count,
                repeat,
            }
        }
        opcodes::OP_LDF => {
            let dest = r.float_index()?;
            let src = r.operand()?;
            Instruction::LdFloat { dest, src }
        }
        opcodes::OP_PUSH => {
            let src = r.operand()?;
            let width = src.natural_width().unwrap_or(1) as u8;
            Instruction::Push {
                src,
                width,
                sized: false,
            }
        }
        opcodes::OP_PUSH16 | opcodes::OP_PUSH24 | opcodes::OP_PUSH32 => {
            let src = r.operand()?;
            if matches!(src, Operand::Register(_)) {
                return Err(r.invalid("sized PUSH takes a memory or immediate operand"));
            }
            let width = sized_width(opcode).unwrap_or(1) as u8;
            Instruction::Push {
                src,
                width,
                sized: true,
            }
        }
        opcodes::OP_PUSH_RANGE => {
            let first = r.ring_index()?;
            let last = r.ring_index()?;
            Instruction::PushRange { first, last }
        }
        opcodes::OP_PUSH_FLOAT => {
            let (first, last) = r.float_range()?;
            Instruction::PushFloat { first, last }
        }
        opcodes::OP_POP => {
            let dest = r.operand()?;
            if matches!(dest, Operand::Immediate { .. }) {
                return Err(r.invalid("POP destination cannot be an immediate"));
            }
            let width = dest.natural_width().unwrap_or(1) as u8;
            Instruction::Pop { dest, width }
        }
        opcodes::OP_POP16 | opcodes::OP_POP24 | opcodes::OP_POP32 => {
            let dest = r.operand()?;
            if !dest.is_memory() {
                return Err(r.invalid("sized POP takes a memory operand"));
            }
            let width = sized_width(opcode).unwrap_or(1) as u8;
            Instruction::Pop { dest, width }
        }
        opcodes::OP_POP_RANGE => {
            let first = r.ring_index()?;
            let last = r.ring_index()?;
            Instruction::PopRange { first, last }
        }
        opcodes::OP_POP_FLOAT => {
            let (first, last) = r.float_range()?;
            Instruction::PopFloat { first, last }
        }
        _ => return Err(VmError::InvalidOpcode { opcode, pc }),
    };

    let len = r.pos - start;
    debug_assert_eq!(len, inst.size(), "decoded length disagrees with encoding");
    Ok((inst, len))
}
