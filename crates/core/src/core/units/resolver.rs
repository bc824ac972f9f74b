//! Operand Resolver.
//!
//! Shared by every data-movement opcode. Given an addressing-mode descriptor it
//! produces either a value or an effective address. It provides:
//! 1. **Value Resolution:** Immediates, register views, and memory reads.
//! 2. **Address Resolution:** Absolute and indirect bases with constant or
//!    signed register offsets.
//! 3. **Block Construction:** Memory copies, plus slicing, zero-padding, and
//!    replication of value sources.
//!
//! Effective addresses are computed in `i64` and must land in `0..=u32::MAX`;
//! anything outside faults instead of wrapping.

use crate::common::constants::MAX_REG_WIDTH;
use crate::common::error::{Result, VmError};
use crate::common::reg::RegisterFile;
use crate::isa::operand::{OffsetDir, Operand, RegView};
use crate::soc::memory::Memory;

/// Reinterprets the low `width` bytes of `raw` as a two's-complement integer.
///
/// The sign bit is the top bit of the view, not of the machine word: a 2-byte
/// `0xFFFD` is `-3`, a 3-byte `0x00FFFD` is `65533`.
#[inline(always)]
pub const fn sign_extend(raw: u32, width: usize) -> i64 {
    let shift = (32 - 8 * width) as u32;
    ((raw << shift) as i32 >> shift) as i64
}

/// Masks `val` to its low `width` bytes.
#[inline(always)]
pub const fn truncate(val: u32, width: usize) -> u32 {
    if width >= MAX_REG_WIDTH {
        val
    } else {
        val & ((1u32 << (8 * width)) - 1)
    }
}

/// Builds the byte sequence written by a block transfer.
///
/// The source is taken as four big-endian bytes. `count <= 4` keeps the low
/// `count` bytes; `count > 4` left-pads with zeros to `count` bytes. The block
/// is then replicated `repeat` times. Either parameter being zero yields an
/// empty sequence.
pub fn resolve_block(value: u32, count: usize, repeat: usize) -> Vec<u8> {
    let word = value.to_be_bytes();
    let block: Vec<u8> = if count <= MAX_REG_WIDTH {
        word[MAX_REG_WIDTH - count..].to_vec()
    } else {
        let mut padded = vec![0u8; count - MAX_REG_WIDTH];
        padded.extend_from_slice(&word);
        padded
    };
    block.repeat(repeat)
}

/// Read-only view over the machine used to evaluate operands.
///
/// Borrowed for the duration of one instruction; holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct OperandResolver<'a> {
    regs: &'a RegisterFile,
    mem: &'a Memory,
    pc: u32,
}

impl<'a> OperandResolver<'a> {
    /// Creates a resolver for the instruction at `pc`.
    pub const fn new(regs: &'a RegisterFile, mem: &'a Memory, pc: u32) -> Self {
        Self { regs, mem, pc }
    }

    fn view(&self, view: RegView) -> u32 {
        self.regs.get_wide(view.start(), view.width())
    }

    /// Signed value of an offset register at its own width.
    pub fn signed_offset(&self, view: RegView) -> i64 {
        sign_extend(self.view(view), view.width())
    }

    /// Computes the effective address named by a memory operand.
    ///
    /// # Errors
    ///
    /// `InvalidOperand` for immediates and plain registers, `AddressOutOfRange`
    /// when the offset arithmetic leaves the 32-bit address space.
    pub fn resolve_address(&self, op: &Operand) -> Result<u32> {
        let (base, dir, offset) = match *op {
            Operand::Immediate { .. } | Operand::Register(_) => {
                return Err(VmError::InvalidOperand {
                    pc: self.pc,
                    reason: "operand does not name a memory address",
                });
            }
            Operand::Absolute(addr) => return Ok(addr),
            Operand::Indirect(base) => return Ok(self.view(base)),
            Operand::AbsoluteConstOffset { addr, dir, k } => {
                (i64::from(addr), dir, i64::from(k))
            }
            Operand::AbsoluteRegOffset { addr, dir, offset } => {
                (i64::from(addr), dir, self.signed_offset(offset))
            }
            Operand::IndirectConstOffset { base, dir, k } => {
                (i64::from(self.view(base)), dir, i64::from(k))
            }
            Operand::IndirectRegOffset { base, dir, offset } => (
                i64::from(self.view(base)),
                dir,
                self.signed_offset(offset),
            ),
        };
        effective_address(base, dir, offset)
    }

    /// Evaluates an operand at `width` bytes.
    ///
    /// Immediates are masked to `width`; registers are read at their own
    /// width; memory operands read `width` bytes at the effective address.
    pub fn resolve_value(&self, op: &Operand, width: usize) -> Result<u32> {
        match *op {
            Operand::Immediate { value, .. } => Ok(truncate(value, width)),
            Operand::Register(view) => Ok(self.view(view)),
            _ => {
                let addr = self.resolve_address(op)?;
                self.mem.get_n(addr, width)
            }
        }
    }

    /// Builds one block of `count` bytes from a block-transfer source.
    ///
    /// Memory sources copy `count` bytes starting at the effective address.
    /// Immediates and registers are taken at their own width and sliced or
    /// zero-padded by [`resolve_block`]. A zero count reads nothing.
    pub fn resolve_block_source(&self, op: &Operand, count: usize) -> Result<Vec<u8>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        match op.natural_width() {
            Some(width) => Ok(resolve_block(self.resolve_value(op, width)?, count, 1)),
            None => {
                let addr = self.resolve_address(op)?;
                Ok(self.mem.get_range(addr, count)?.to_vec())
            }
        }
    }
}

/// Applies a signed offset to a base, faulting outside `0..=u32::MAX`.
fn effective_address(base: i64, dir: OffsetDir, offset: i64) -> Result<u32> {
    let address = dir.apply(base, offset);
    u32::try_from(address).map_err(|_| VmError::AddressOutOfRange { address })
}
