//! Core processor implementation.
//!
//! This module contains the executor, its register storage, and the units it
//! borrows per instruction.

/// Architectural register storage (ring, float bank).
pub mod arch;

/// Executor state and the fetch-decode-execute loop.
pub mod cpu;

/// Execution units (operand resolver, stack engine).
pub mod units;

pub use self::cpu::{Cpu, CpuState};
