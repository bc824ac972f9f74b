//! Data Stack Engine.
//!
//! A byte-granular stack laid over a fixed region of system memory. The stack
//! pointer counts the bytes currently on the stack, so the next free byte is
//! always `base + sp`. Values are stored big-endian.

use crate::common::constants::MAX_REG_WIDTH;
use crate::common::error::{Result, VmError};
use crate::soc::memory::Memory;

/// Location and capacity of the stack region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackRegion {
    /// Memory address of stack offset 0.
    pub base: u32,
    /// Capacity in bytes.
    pub size: u32,
}

/// Stack operations borrowing memory and the stack pointer for one instruction.
#[derive(Debug)]
pub struct StackEngine<'a> {
    mem: &'a mut Memory,
    sp: &'a mut u32,
    region: StackRegion,
}

impl<'a> StackEngine<'a> {
    /// Wraps memory and the stack pointer register.
    pub const fn new(mem: &'a mut Memory, sp: &'a mut u32, region: StackRegion) -> Self {
        Self { mem, sp, region }
    }

    /// Appends raw bytes at the top of the stack.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let overflow = || VmError::StackOverflow {
            sp: *self.sp,
            width: bytes.len(),
        };
        let len = u32::try_from(bytes.len()).map_err(|_| overflow())?;
        let new_sp = self
            .sp
            .checked_add(len)
            .filter(|&sp| sp <= self.region.size)
            .ok_or_else(overflow)?;
        self.mem.set_range(self.region.base + *self.sp, bytes)?;
        *self.sp = new_sp;
        Ok(())
    }

    /// Pushes the low `width` bytes of `value`, most significant first.
    pub fn push_value(&mut self, value: u32, width: usize) -> Result<()> {
        let be = value.to_be_bytes();
        self.push_bytes(&be[MAX_REG_WIDTH - width..])
    }

    /// Removes `width` bytes from the top of the stack and composes them big-endian.
    pub fn pop_value(&mut self, width: usize) -> Result<u32> {
        let underflow = || VmError::StackUnderflow {
            sp: *self.sp,
            width,
        };
        let len = u32::try_from(width).map_err(|_| underflow())?;
        let new_sp = self.sp.checked_sub(len).ok_or_else(underflow)?;
        let value = self.mem.get_n(self.region.base + new_sp, width)?;
        *self.sp = new_sp;
        Ok(value)
    }
}

/// Reads `width` bytes big-endian at `offset` bytes into the stack region.
///
/// Verification helper; the executor never reads the stack this way.
pub fn read_stack(mem: &Memory, region: StackRegion, offset: u32, width: usize) -> Result<u32> {
    let addr = region
        .base
        .checked_add(offset)
        .ok_or(VmError::AddressOutOfRange {
            address: i64::from(region.base) + i64::from(offset),
        })?;
    mem.get_n(addr, width)
}
