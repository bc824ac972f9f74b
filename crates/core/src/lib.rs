//! Deterministic byte-register virtual CPU library.
//!
//! This crate implements a small virtual machine with the following:
//! 1. **Core:** A 26-slot one-byte register ring with wrapping wide views, a float bank, and the executor.
//! 2. **Memory:** A flat byte-addressed, big-endian address space with a memory-resident data stack.
//! 3. **ISA:** Bytecode decoding and encoding for LD, LDF, the PUSH/POP families, and BREAK.
//! 4. **Operands:** Eight addressing modes resolved to values, addresses, and block transfers.
//! 5. **Simulation:** Host facade, loader, configuration, snapshots, and statistics.
//!
//! # Examples
//!
//! ```
//! use ringvm_core::isa::{encode_program, Instruction, Operand, RegView};
//! use ringvm_core::{Config, Simulator};
//!
//! let program = encode_program(&[
//!     Instruction::Ld {
//!         dest: Operand::Register(RegView::new(0, 2)),
//!         src: Operand::Immediate { value: 0x1234, width: 2 },
//!     },
//!     Instruction::Break,
//! ]);
//!
//! let mut sim = Simulator::with_program(&Config::default(), &program).unwrap();
//! sim.run().unwrap();
//! assert_eq!(sim.get_wide(0, 2), 0x1234);
//! ```

/// Common types and constants (errors, register file).
pub mod common;
/// Machine configuration (defaults, JSON loading, validation).
pub mod config;
/// CPU core (register storage, executor, operand resolver, stack engine).
pub mod core;
/// Instruction set (opcodes, operands, decode, encode).
pub mod isa;
/// Host facade, loader, and snapshots.
pub mod sim;
/// System memory.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Crate-wide error and result types.
pub use crate::common::{Result, VmError};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type and its run state.
pub use crate::core::{Cpu, CpuState};
/// Host facade; construct with `Simulator::try_new` or `Simulator::new`.
pub use crate::sim::{Simulator, Snapshot};
