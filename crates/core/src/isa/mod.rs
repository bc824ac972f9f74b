//! Instruction Set Definitions.
//!
//! Contains the bytecode contract the executor consumes: opcode assignments,
//! addressing-mode descriptors, decoded instruction forms, and the decoder
//! with its inverse encoder.
//!
//! # Families
//!
//! * `LD`: scalar load/store, block fill/copy, and float load.
//! * `PUSH` / `POP`: register, memory, ring-range, and float-range stack transfers.
//! * `BREAK`: halt.

/// Bytecode decoder with operand validation.
pub mod decode;

/// Bytecode encoder (inverse of `decode`).
pub mod encode;

/// Decoded instruction forms.
pub mod instruction;

/// Opcode byte assignments.
pub mod opcodes;

/// Addressing-mode descriptors and operand tags.
pub mod operand;

pub use decode::decode;
pub use encode::{encode, encode_program};
pub use instruction::Instruction;
pub use operand::{OffsetDir, Operand, RegView};
