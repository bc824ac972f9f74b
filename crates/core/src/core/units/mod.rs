//! Execution units.
//!
//! This module contains the per-instruction helpers the executor borrows the
//! machine through:
//! 1. **Resolver:** Addressing-mode evaluation and block construction.
//! 2. **Stack:** Push/pop over the memory-resident data stack.

/// Operand resolution (values, effective addresses, block transfers).
pub mod resolver;

/// Data stack engine.
pub mod stack;

pub use resolver::OperandResolver;
pub use stack::{StackEngine, StackRegion};
