//! Bytecode Encoder.
//!
//! Inverse of [`decode`](super::decode::decode): lays an [`Instruction`] out in
//! the version 1 record format. Hosts and tests use it to synthesize programs
//! without a text assembler. The encoder trusts its input; validation happens
//! when the bytes are decoded.

use super::instruction::Instruction;
use super::operand::{Operand, RegView};

fn put_view(out: &mut Vec<u8>, view: RegView) {
    out.extend_from_slice(&[view.start, view.width]);
}

fn put_u32(out: &mut Vec<u8>, val: u32) {
    out.extend_from_slice(&val.to_be_bytes());
}

/// Appends the encoding of one operand.
pub fn encode_operand(out: &mut Vec<u8>, op: &Operand) {
    out.push(op.tag() as u8);
    match *op {
        Operand::Immediate { value, width } => {
            out.push(width);
            let be = value.to_be_bytes();
            out.extend_from_slice(&be[be.len() - usize::from(width)..]);
        }
        Operand::Register(view) | Operand::Indirect(view) => put_view(out, view),
        Operand::Absolute(addr) => put_u32(out, addr),
        Operand::AbsoluteConstOffset { addr, dir, k } => {
            put_u32(out, addr);
            out.push(dir.to_byte());
            put_u32(out, k);
        }
        Operand::AbsoluteRegOffset { addr, dir, offset } => {
            put_u32(out, addr);
            out.push(dir.to_byte());
            put_view(out, offset);
        }
        Operand::IndirectConstOffset { base, dir, k } => {
            put_view(out, base);
            out.push(dir.to_byte());
            put_u32(out, k);
        }
        Operand::IndirectRegOffset { base, dir, offset } => {
            put_view(out, base);
            out.push(dir.to_byte());
            put_view(out, offset);
        }
    }
}

/// Appends the encoding of one instruction.
pub fn encode_into(out: &mut Vec<u8>, inst: &Instruction) {
    out.push(inst.opcode());
    match inst {
        Instruction::Break => {}
        Instruction::Ld { dest, src } => {
            encode_operand(out, dest);
            encode_operand(out, src);
        }
        Instruction::LdBlock {
            dest,
            src,
            count,
            repeat,
        } => {
            encode_operand(out, dest);
            encode_operand(out, src);
            out.push(*count);
            out.extend_from_slice(&repeat.to_be_bytes());
        }
        Instruction::LdFloat { dest, src } => {
            out.push(*dest);
            encode_operand(out, src);
        }
        Instruction::Push { src: op, .. } | Instruction::Pop { dest: op, .. } => {
            encode_operand(out, op);
        }
        Instruction::PushRange { first, last }
        | Instruction::PushFloat { first, last }
        | Instruction::PopRange { first, last }
        | Instruction::PopFloat { first, last } => out.extend_from_slice(&[*first, *last]),
    }
}

/// Encodes one instruction into a fresh buffer.
pub fn encode(inst: &Instruction) -> Vec<u8> {
    let mut out = Vec::with_capacity(inst.size());
    encode_into(&mut out, inst);
    out
}

/// Encodes a whole program.
pub fn encode_program(program: &[Instruction]) -> Vec<u8> {
    let mut out = Vec::with_capacity(program.iter().map(Instruction::size).sum());
    for inst in program {
        encode_into(&mut out, inst);
    }
    out
}
