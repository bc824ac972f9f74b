use ringvm_core::isa::{Instruction, OffsetDir, Operand, RegView, encode_program};

/// Names a ring view the way assembly does: `"A"`, `"ABC"`, `"YZAB"`.
///
/// The first letter is the start slot and the length is the width.
pub fn view(name: &str) -> RegView {
    let first = name.as_bytes()[0];
    assert!(first.is_ascii_uppercase(), "bad register name {name}");
    RegView::new(first - b'A', name.len() as u8)
}

/// Register operand, `LD ABC, ...`.
pub fn reg(name: &str) -> Operand {
    Operand::Register(view(name))
}

/// Immediate of `width` bytes.
pub fn imm(value: u32, width: u8) -> Operand {
    Operand::Immediate { value, width }
}

/// `(addr)`
pub fn abs(addr: u32) -> Operand {
    Operand::Absolute(addr)
}

/// `(addr + k)`
pub fn abs_plus(addr: u32, k: u32) -> Operand {
    Operand::AbsoluteConstOffset {
        addr,
        dir: OffsetDir::Add,
        k,
    }
}

/// `(addr - k)`
pub fn abs_minus(addr: u32, k: u32) -> Operand {
    Operand::AbsoluteConstOffset {
        addr,
        dir: OffsetDir::Sub,
        k,
    }
}

/// `(addr + R)` with a signed offset register.
pub fn abs_plus_reg(addr: u32, offset: &str) -> Operand {
    Operand::AbsoluteRegOffset {
        addr,
        dir: OffsetDir::Add,
        offset: view(offset),
    }
}

/// `(R)`
pub fn ind(base: &str) -> Operand {
    Operand::Indirect(view(base))
}

/// `(R + k)`
pub fn ind_plus(base: &str, k: u32) -> Operand {
    Operand::IndirectConstOffset {
        base: view(base),
        dir: OffsetDir::Add,
        k,
    }
}

/// `(R - k)`
pub fn ind_minus(base: &str, k: u32) -> Operand {
    Operand::IndirectConstOffset {
        base: view(base),
        dir: OffsetDir::Sub,
        k,
    }
}

/// `(R1 + R2)` or `(R1 - R2)`.
pub fn ind_reg(base: &str, dir: OffsetDir, offset: &str) -> Operand {
    Operand::IndirectRegOffset {
        base: view(base),
        dir,
        offset: view(offset),
    }
}

/// Fluent builder producing encoded bytecode.
#[derive(Default)]
pub struct ProgramBuilder {
    insts: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inst(mut self, inst: Instruction) -> Self {
        self.insts.push(inst);
        self
    }

    pub fn ld(self, dest: Operand, src: Operand) -> Self {
        self.inst(Instruction::Ld { dest, src })
    }

    pub fn ld_block(self, dest: Operand, src: Operand, count: u8, repeat: u16) -> Self {
        self.inst(Instruction::LdBlock {
            dest,
            src,
            count,
            repeat,
        })
    }

    pub fn ldf(self, dest: u8, src: Operand) -> Self {
        self.inst(Instruction::LdFloat { dest, src })
    }

    /// `PUSH src` at the operand's natural width (one byte for memory).
    pub fn push(self, src: Operand) -> Self {
        let width = src.natural_width().unwrap_or(1) as u8;
        self.inst(Instruction::Push {
            src,
            width,
            sized: false,
        })
    }

    /// `PUSH16/24/32 src`
    pub fn push_n(self, src: Operand, width: u8) -> Self {
        self.inst(Instruction::Push {
            src,
            width,
            sized: true,
        })
    }

    pub fn push_range(self, first: &str, last: &str) -> Self {
        self.inst(Instruction::PushRange {
            first: view(first).start,
            last: view(last).start,
        })
    }

    pub fn push_float(self, first: u8, last: u8) -> Self {
        self.inst(Instruction::PushFloat { first, last })
    }

    /// `POP dest` at the operand's natural width (one byte for memory).
    pub fn pop(self, dest: Operand) -> Self {
        let width = dest.natural_width().unwrap_or(1) as u8;
        self.inst(Instruction::Pop { dest, width })
    }

    /// `POP16/24/32 dest`
    pub fn pop_n(self, dest: Operand, width: u8) -> Self {
        self.inst(Instruction::Pop { dest, width })
    }

    pub fn pop_range(self, first: &str, last: &str) -> Self {
        self.inst(Instruction::PopRange {
            first: view(first).start,
            last: view(last).start,
        })
    }

    pub fn pop_float(self, first: u8, last: u8) -> Self {
        self.inst(Instruction::PopFloat { first, last })
    }

    pub fn brk(self) -> Self {
        self.inst(Instruction::Break)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.insts
    }

    pub fn build(&self) -> Vec<u8> {
        encode_program(&self.insts)
    }
}
