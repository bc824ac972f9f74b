//! Opcode byte assignments (bytecode version 1).

/// Halt the fetch-decode-execute loop.
pub const OP_BREAK: u8 = 0x00;

/// Scalar load/store: `LD dest, src`.
pub const OP_LD: u8 = 0x01;

/// Block fill/copy: `LD (dest), src, count[, repeat]`.
pub const OP_LD_BLOCK: u8 = 0x02;

/// Float load: `LDF fN, src`.
pub const OP_LDF: u8 = 0x03;

/// Push an operand at its natural width (register or immediate width, one byte for memory).
pub const OP_PUSH: u8 = 0x10;

/// Push two bytes read from memory or an immediate.
pub const OP_PUSH16: u8 = 0x11;

/// Push three bytes read from memory or an immediate.
pub const OP_PUSH24: u8 = 0x12;

/// Push four bytes read from memory or an immediate.
pub const OP_PUSH32: u8 = 0x13;

/// Push an inclusive ring range one byte register at a time.
pub const OP_PUSH_RANGE: u8 = 0x14;

/// Push an inclusive float register range, four bytes each.
pub const OP_PUSH_FLOAT: u8 = 0x15;

/// Pop into an operand at its natural width.
pub const OP_POP: u8 = 0x18;

/// Pop two bytes into memory.
pub const OP_POP16: u8 = 0x19;

/// Pop three bytes into memory.
pub const OP_POP24: u8 = 0x1A;

/// Pop four bytes into memory.
pub const OP_POP32: u8 = 0x1B;

/// Pop an inclusive ring range, last register first.
pub const OP_POP_RANGE: u8 = 0x1C;

/// Pop an inclusive float register range, last register first.
pub const OP_POP_FLOAT: u8 = 0x1D;

/// Operand width in bytes carried by a sized push/pop opcode, if it is one.
pub const fn sized_width(opcode: u8) -> Option<usize> {
    match opcode {
        OP_PUSH16 | OP_POP16 => Some(2),
        OP_PUSH24 | OP_POP24 => Some(3),
        OP_PUSH32 | OP_POP32 => Some(4),
        _ => None,
    }
}
