//! System components outside the core.
//!
//! The machine has a single flat memory; there is no bus, no MMIO, and no
//! device model.

/// Flat system memory and its backing buffer.
pub mod memory;

pub use memory::Memory;
