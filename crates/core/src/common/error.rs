//! Fault definitions.
//!
//! Every way execution can stop other than `BREAK` is a [`VmError`]. Faults are
//! reported synchronously by the failing operation and are not recoverable
//! within a run: the CPU moves to the faulted state and the host decides what
//! to do next.

use thiserror::Error;

use crate::core::cpu::CpuState;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, VmError>;

/// Errors raised while decoding, executing, loading, or configuring the machine.
#[derive(Debug, Error)]
pub enum VmError {
    /// Opcode byte not present in the instruction table.
    #[error("invalid opcode {opcode:#04x} at pc {pc:#x}")]
    InvalidOpcode {
        /// The offending byte.
        opcode: u8,
        /// Program offset of the instruction.
        pc: u32,
    },

    /// Operand tag byte not present in the addressing-mode table.
    #[error("invalid addressing-mode tag {tag:#04x} at pc {pc:#x}")]
    InvalidAddressingMode {
        /// The offending byte.
        tag: u8,
        /// Program offset of the operand.
        pc: u32,
    },

    /// Operand decoded but not legal where it appears.
    #[error("invalid operand at pc {pc:#x}: {reason}")]
    InvalidOperand {
        /// Program offset of the instruction.
        pc: u32,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Bytecode ended in the middle of an instruction, or the PC ran past it.
    #[error("unexpected end of bytecode at pc {pc:#x}")]
    UnexpectedEndOfBytecode {
        /// Program offset where more bytes were needed.
        pc: u32,
    },

    /// Effective address fell outside the 32-bit address space.
    #[error("effective address {address} out of range")]
    AddressOutOfRange {
        /// The computed (signed) address.
        address: i64,
    },

    /// Access touched bytes outside the allocated memory.
    #[error("memory fault: {len} byte(s) at {addr:#x} exceed memory size {size:#x}")]
    MemoryFault {
        /// First byte of the access.
        addr: u64,
        /// Access length in bytes.
        len: usize,
        /// Allocated memory size.
        size: usize,
    },

    /// Push would run past the end of the stack region.
    #[error("stack overflow: pushing {width} byte(s) at sp {sp:#x}")]
    StackOverflow {
        /// Stack pointer before the push.
        sp: u32,
        /// Bytes requested.
        width: usize,
    },

    /// Pop requested more bytes than are on the stack.
    #[error("stack underflow: popping {width} byte(s) at sp {sp:#x}")]
    StackUnderflow {
        /// Stack pointer before the pop.
        sp: u32,
        /// Bytes requested.
        width: usize,
    },

    /// The instruction budget ran out before `BREAK`.
    #[error("cycle limit of {limit} instructions exceeded")]
    CycleLimitExceeded {
        /// Configured budget.
        limit: u64,
    },

    /// `run` was called on a CPU that is not idle, or `step` on one that has stopped.
    #[error("cpu is {state:?} and cannot start executing")]
    NotRunnable {
        /// State the CPU was in.
        state: CpuState,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a bytecode image failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
