//! Common utilities and types used throughout the engine.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the machine. It includes:
//! 1. **Constants:** Ring geometry, float bank size, and operand field widths.
//! 2. **Error Handling:** The fault type returned by every fallible operation.
//! 3. **Register Management:** A unified interface for ring, float, and special registers.

/// Common constants used throughout the engine.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{FPR_COUNT, MAX_REG_WIDTH, RING_SIZE};
pub use error::{Result, VmError};
pub use reg::RegisterFile;
