//! Floating-Point Register Bank.
//!
//! This module implements the float register bank. It performs the following:
//! 1. **Storage:** Maintains [`FPR_COUNT`] single-precision registers (`f0`-`f7`).
//! 2. **Type Conversion:** Converts between raw IEEE-754 bits and `f32`.
//! 3. **Independence:** The bank never aliases the general-purpose ring.

use crate::common::constants::FPR_COUNT;

/// Floating-point register bank.
///
/// Registers hold raw 32-bit IEEE-754 patterns, so stack traffic preserves
/// every bit including NaN payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fpr {
    fregs: [u32; FPR_COUNT],
}

impl Fpr {
    /// Creates a new bank with all registers set to `0.0`.
    pub const fn new() -> Self {
        Self {
            fregs: [0; FPR_COUNT],
        }
    }

    /// Reads a register as raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The 32-bit IEEE-754 representation of the stored value.
    pub fn read(&self, idx: usize) -> u32 {
        self.fregs[idx]
    }

    /// Writes a register from raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 32-bit IEEE-754 representation to store.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.fregs[idx] = val;
    }

    /// Reads a register as `f32`.
    pub fn read_f32(&self, idx: usize) -> f32 {
        f32::from_bits(self.fregs[idx])
    }

    /// Writes a register from `f32`.
    pub fn write_f32(&mut self, idx: usize, val: f32) {
        self.fregs[idx] = val.to_bits();
    }
}
