//! DRAM Buffer Implementation.
//!
//! Zero-initialized backing storage for the flat address space. Every access
//! is bounds-checked against the allocation and reports a fault instead of
//! wrapping or clamping.

use std::ops::{Index, IndexMut, Range};

use crate::common::error::{Result, VmError};

/// Owned, zero-filled byte storage of fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DramBuffer {
    bytes: Vec<u8>,
}

impl DramBuffer {
    /// Allocates `size` zeroed bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has no storage.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maps `[addr, addr + len)` to an index range, or faults if any byte is out of bounds.
    pub fn span(&self, addr: u64, len: usize) -> Result<Range<usize>> {
        let fault = || VmError::MemoryFault {
            addr,
            len,
            size: self.bytes.len(),
        };
        let start = usize::try_from(addr).map_err(|_| fault())?;
        let end = start.checked_add(len).ok_or_else(fault)?;
        if end > self.bytes.len() {
            return Err(fault());
        }
        Ok(start..end)
    }

    /// Reads a slice of memory.
    pub fn read_slice(&self, addr: u64, len: usize) -> Result<&[u8]> {
        let span = self.span(addr, len)?;
        Ok(&self.bytes[span])
    }

    /// Writes a slice of memory.
    pub fn write_slice(&mut self, addr: u64, data: &[u8]) -> Result<()> {
        let span = self.span(addr, data.len())?;
        self.bytes[span].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Index<usize> for DramBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}

impl IndexMut<usize> for DramBuffer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bytes[index]
    }
}
