//! # Statistics Tests
//!
//! Verifies that the executor keeps [`SimStats`](ringvm_core::stats::SimStats)
//! in step with what a program actually did, and that reset clears it.

use ringvm_core::stats::STATS_SECTIONS;

use crate::common::TestContext;
use crate::common::builder::program::{ProgramBuilder, abs, imm, reg};

#[test]
fn counts_follow_the_instruction_mix() {
    let program = ProgramBuilder::new()
        .ld(reg("AB"), imm(0x0102, 2))
        .ld_block(abs(0x100), reg("AB"), 2, 3)
        .ldf(0, imm(0, 4))
        .push(reg("AB"))
        .push_range("A", "D")
        .push_float(0, 1)
        .pop_n(abs(0x200), 4)
        .pop(reg("C"))
        .brk();
    let ctx = TestContext::new().load(&program).run_to_halt();
    let stats = ctx.sim.stats();

    assert_eq!(stats.instructions_retired, 9);
    assert_eq!(stats.inst_ld, 1);
    assert_eq!(stats.inst_ld_block, 1);
    assert_eq!(stats.inst_ldf, 1);
    assert_eq!(stats.inst_push, 3);
    assert_eq!(stats.inst_pop, 2);
    assert_eq!(stats.block_bytes_written, 6);
    assert_eq!(stats.bytes_pushed, 2 + 4 + 8);
    assert_eq!(stats.bytes_popped, 5);
    assert_eq!(u64::from(ctx.sp()), stats.bytes_pushed - stats.bytes_popped);
}

#[test]
fn reset_clears_counters() {
    let program = ProgramBuilder::new().ld(reg("A"), imm(1, 1)).brk();
    let mut ctx = TestContext::new().load(&program).run_to_halt();
    ctx.sim.reset();
    assert_eq!(ctx.sim.stats().instructions_retired, 0);
    assert_eq!(ctx.sim.stats().inst_ld, 0);
}

#[test]
fn section_names_are_stable() {
    assert_eq!(STATS_SECTIONS, &["summary", "instruction_mix", "data"]);
}
