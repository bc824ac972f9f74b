//! Decoded instruction forms.
//!
//! An [`Instruction`] is the fully decoded, validated form of one bytecode
//! record. Operand widths that the encoding leaves implicit (the natural width
//! of a pushed register, the width of a sized push) are made explicit here.

use super::opcodes;
use super::operand::Operand;

/// One decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Halt.
    Break,
    /// `LD dest, src`
    Ld {
        /// Register or memory destination.
        dest: Operand,
        /// Any operand.
        src: Operand,
    },
    /// `LD (dest), src, count, repeat`
    LdBlock {
        /// Memory destination.
        dest: Operand,
        /// Any operand.
        src: Operand,
        /// Bytes per block.
        count: u8,
        /// Number of contiguous blocks.
        repeat: u16,
    },
    /// `LDF fN, src`
    LdFloat {
        /// Float register index.
        dest: u8,
        /// Any operand, read as four raw bytes.
        src: Operand,
    },
    /// `PUSH src` / `PUSH16|24|32 src`
    Push {
        /// Value to push.
        src: Operand,
        /// Bytes pushed.
        width: u8,
        /// Encoded as `PUSH16|24|32`. A plain `PUSH` of a wide immediate
        /// has the same width but keeps the plain opcode.
        sized: bool,
    },
    /// `PUSH a, b` over the ring.
    PushRange {
        /// First ring slot.
        first: u8,
        /// Last ring slot, inclusive; may wrap past `Z`.
        last: u8,
    },
    /// `PUSH fa, fb`
    PushFloat {
        /// First float register.
        first: u8,
        /// Last float register, inclusive.
        last: u8,
    },
    /// `POP dest` / `POP16|24|32 dest`
    Pop {
        /// Register or memory destination.
        dest: Operand,
        /// Bytes popped.
        width: u8,
    },
    /// `POP a, b` over the ring.
    PopRange {
        /// First ring slot.
        first: u8,
        /// Last ring slot, inclusive.
        last: u8,
    },
    /// `POP fa, fb`
    PopFloat {
        /// First float register.
        first: u8,
        /// Last float register, inclusive.
        last: u8,
    },
}

impl Instruction {
    /// Opcode byte this instruction encodes to.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Break => opcodes::OP_BREAK,
            Self::Ld { .. } => opcodes::OP_LD,
            Self::LdBlock { .. } => opcodes::OP_LD_BLOCK,
            Self::LdFloat { .. } => opcodes::OP_LDF,
            Self::Push { width, sized, .. } => match (sized, width) {
                (false, _) => opcodes::OP_PUSH,
                (true, 2) => opcodes::OP_PUSH16,
                (true, 3) => opcodes::OP_PUSH24,
                (true, _) => opcodes::OP_PUSH32,
            },
            Self::PushRange { .. } => opcodes::OP_PUSH_RANGE,
            Self::PushFloat { .. } => opcodes::OP_PUSH_FLOAT,
            Self::Pop { dest, width } => match (dest, width) {
                (Operand::Register(_), _) | (_, 1) => opcodes::OP_POP,
                (_, 2) => opcodes::OP_POP16,
                (_, 3) => opcodes::OP_POP24,
                _ => opcodes::OP_POP32,
            },
            Self::PopRange { .. } => opcodes::OP_POP_RANGE,
            Self::PopFloat { .. } => opcodes::OP_POP_FLOAT,
        }
    }

    /// Encoded length in bytes, including the opcode.
    pub const fn size(&self) -> usize {
        1 + match self {
            Self::Break => 0,
            Self::Ld { dest, src } => dest.size() + src.size(),
            Self::LdBlock { dest, src, .. } => dest.size() + src.size() + 1 + 2,
            Self::LdFloat { src, .. } => 1 + src.size(),
            Self::Push { src: op, .. } | Self::Pop { dest: op, .. } => op.size(),
            Self::PushRange { .. }
            | Self::PushFloat { .. }
            | Self::PopRange { .. }
            | Self::PopFloat { .. } => 2,
        }
    }

    /// Mnemonic, for trace output.
    pub const fn mnemonic(&self) -> &'static str {
        match self.opcode() {
            opcodes::OP_BREAK => "BREAK",
            opcodes::OP_LD | opcodes::OP_LD_BLOCK => "LD",
            opcodes::OP_LDF => "LDF",
            opcodes::OP_PUSH16 => "PUSH16",
            opcodes::OP_PUSH24 => "PUSH24",
            opcodes::OP_PUSH32 => "PUSH32",
            opcodes::OP_POP16 => "POP16",
            opcodes::OP_POP24 => "POP24",
            opcodes::OP_POP32 => "POP32",
            opcodes::OP_POP | opcodes::OP_POP_RANGE | opcodes::OP_POP_FLOAT => "POP",
            _ => "PUSH",
        }
    }
}
