//! Flat System Memory.
//!
//! This module implements the machine's single address space. It provides:
//! 1. **Buffer:** Zero-initialized backing storage (`DramBuffer`).
//! 2. **Scalar Access:** Big-endian reads and writes of 1-4 bytes.
//! 3. **Block Access:** Arbitrary-length range reads and writes.
//!
//! Every write of width `w` at `a` touches exactly `[a, a + w)`.

/// DRAM buffer implementation for raw byte storage.
pub mod buffer;

use std::ops::{Index, IndexMut};

use self::buffer::DramBuffer;
use crate::common::constants::MAX_REG_WIDTH;
use crate::common::error::Result;

/// System memory: a flat, byte-addressable, big-endian address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: DramBuffer,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
        }
    }

    /// Returns the size of memory in bytes.
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no memory is allocated.
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Reads `width` bytes at `addr` and composes them big-endian.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=4`.
    pub fn get_n(&self, addr: u32, width: usize) -> Result<u32> {
        assert!(
            (1..=MAX_REG_WIDTH).contains(&width),
            "memory access width {width} out of range"
        );
        let bytes = self.buffer.read_slice(u64::from(addr), width)?;
        Ok(bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }

    /// Writes the low `width` bytes of `val` at `addr`, most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=4`.
    pub fn set_n(&mut self, addr: u32, val: u32, width: usize) -> Result<()> {
        assert!(
            (1..=MAX_REG_WIDTH).contains(&width),
            "memory access width {width} out of range"
        );
        let be = val.to_be_bytes();
        self.buffer
            .write_slice(u64::from(addr), &be[MAX_REG_WIDTH - width..])
    }

    /// Reads `len` bytes starting at `addr`.
    pub fn get_range(&self, addr: u32, len: usize) -> Result<&[u8]> {
        self.buffer.read_slice(u64::from(addr), len)
    }

    /// Writes `data` starting at `addr`.
    pub fn set_range(&mut self, addr: u32, data: &[u8]) -> Result<()> {
        self.buffer.write_slice(u64::from(addr), data)
    }

    /// Loads a byte image at `addr`. Used to preload memory before execution.
    pub fn load(&mut self, addr: u32, data: &[u8]) -> Result<()> {
        self.set_range(addr, data)
    }

    /// Zeroes the whole address space.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Index<usize> for Memory {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[index]
    }
}

impl IndexMut<usize> for Memory {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buffer[index]
    }
}
