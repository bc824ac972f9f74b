//! # Unit Components
//!
//! This module serves as the central hub for the tests of each machine
//! component, from register storage up to the host facade.

/// Unit tests for the processor core.
///
/// This module covers the register ring, operand resolution, the data stack,
/// and the executor's instruction semantics.
pub mod core;

/// Unit tests for the bytecode contract.
///
/// This module verifies decoding, its faults, and agreement with the encoder.
pub mod isa;

/// Unit tests for system memory.
pub mod soc;



/// Statistics counters maintained by the executor.
pub mod stats;
