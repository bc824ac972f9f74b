//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the engine. It includes:
//! 1. **Register Constants:** Ring size, view widths, and float bank size.
//! 2. **Memory Constants:** Address field width and default region sizes.
//! 3. **Simulation Constants:** Cycle guard defaults and bytecode versioning.

/// Number of one-byte slots in the general-purpose register ring (`A`..`Z`).
pub const RING_SIZE: usize = 26;

/// Widest register view, in bytes.
pub const MAX_REG_WIDTH: usize = 4;

/// Number of 32-bit IEEE-754 registers in the float bank.
pub const FPR_COUNT: usize = 8;

/// Size in bytes of a float register when pushed or loaded.
pub const FPR_WIDTH: usize = 4;

/// Width in bytes of the absolute-address field in encoded operands.
pub const ADDR_FIELD_WIDTH: usize = 4;

/// Width in bytes of a constant offset field in encoded operands.
pub const CONST_OFFSET_WIDTH: usize = 4;

/// Version of the operand tag scheme the decoder understands.
pub const BYTECODE_VERSION: u8 = 1;

/// Conventional register names for the ring, indexed by slot.
pub const RING_NAMES: [char; RING_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
