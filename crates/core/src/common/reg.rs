//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! every architectural register of the machine. It provides:
//! 1. **Ring Access:** Byte and wide (1-4 byte, wrapping) views of the register ring.
//! 2. **Special Registers:** Data-stack pointer, call-stack pointer, and program counter.
//! 3. **Float Bank:** Raw-bit and `f32` access to the float registers.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::ring::Ring;

/// Register file containing the ring, the float bank, and the special registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    ring: Ring,
    fpr: Fpr,
    sp: u32,
    call_sp: u32,
    pc: u32,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            ring: Ring::new(),
            fpr: Fpr::new(),
            sp: 0,
            call_sp: 0,
            pc: 0,
        }
    }

    /// Returns every register to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reads one ring slot.
    ///
    /// # Arguments
    ///
    /// * `idx` - Ring index (0-25).
    pub fn get_byte(&self, idx: usize) -> u8 {
        self.ring.get(idx)
    }

    /// Writes one ring slot.
    ///
    /// # Arguments
    ///
    /// * `idx` - Ring index (0-25).
    /// * `val` - The byte to store.
    pub fn set_byte(&mut self, idx: usize, val: u8) {
        self.ring.set(idx, val);
    }

    /// Reads the wide view `(start, width)`, big-endian, wrapping past `Z`.
    ///
    /// # Panics
    ///
    /// Panics if `start >= 26` or `width` is not in `1..=4`.
    pub fn get_wide(&self, start: usize, width: usize) -> u32 {
        self.ring.get_wide(start, width)
    }

    /// Writes the wide view `(start, width)` in ascending slot order.
    ///
    /// # Panics
    ///
    /// Panics if `start >= 26` or `width` is not in `1..=4`.
    pub fn set_wide(&mut self, start: usize, width: usize, val: u32) {
        self.ring.set_wide(start, width, val);
    }

    /// Returns the raw ring contents.
    pub const fn ring(&self) -> &[u8; crate::common::constants::RING_SIZE] {
        self.ring.as_bytes()
    }

    /// Reads a float register as raw bits.
    pub fn read_f(&self, idx: usize) -> u32 {
        self.fpr.read(idx)
    }

    /// Writes a float register from raw bits.
    pub fn write_f(&mut self, idx: usize, val: u32) {
        self.fpr.write(idx, val);
    }

    /// Reads a float register as `f32`.
    pub fn read_f32(&self, idx: usize) -> f32 {
        self.fpr.read_f32(idx)
    }

    /// Writes a float register from `f32`.
    pub fn write_f32(&mut self, idx: usize, val: f32) {
        self.fpr.write_f32(idx, val);
    }

    /// Data-stack pointer: bytes currently on the data stack.
    pub const fn sp(&self) -> u32 {
        self.sp
    }

    /// Sets the data-stack pointer.
    pub const fn set_sp(&mut self, sp: u32) {
        self.sp = sp;
    }

    /// Mutable access to the data-stack pointer, for the stack engine.
    pub const fn sp_mut(&mut self) -> &mut u32 {
        &mut self.sp
    }

    /// Call-stack pointer. Independent of the data stack.
    pub const fn call_sp(&self) -> u32 {
        self.call_sp
    }

    /// Sets the call-stack pointer.
    pub const fn set_call_sp(&mut self, call_sp: u32) {
        self.call_sp = call_sp;
    }

    /// Program counter, as a byte offset into the program.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Dumps the ring and special registers to stdout.
    pub fn dump(&self) {
        println!("PC={:#010x} SP={:#010x} CSP={:#010x}", self.pc, self.sp, self.call_sp);
        self.ring.dump();
    }
}
