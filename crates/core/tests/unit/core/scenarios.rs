//! Reference Scenarios.
//!
//! Small complete programs with fully known outcomes. Each one exercises a
//! different slice of the executor: immediate loads, absolute and indirect
//! addressing, block writes, and both push forms.

use ringvm_core::common::RING_SIZE;

use crate::common::TestContext;
use crate::common::builder::program::{ProgramBuilder, abs, imm, ind_plus, reg};

const PRELOAD_AT: u32 = 9997;
const PRELOAD: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

#[test]
fn load_immediate_into_a() {
    let ctx = TestContext::new()
        .load(&ProgramBuilder::new().ld(reg("A"), imm(72, 1)).brk())
        .run_to_halt();

    assert_eq!(ctx.byte(0), 72);
    for idx in 1..RING_SIZE {
        assert_eq!(ctx.byte(idx), 0, "slot {idx}");
    }
    assert_eq!(ctx.sp(), 0);
}

#[test]
fn load_absolute_byte() {
    let ctx = TestContext::new()
        .with_memory(PRELOAD_AT, &PRELOAD)
        .load(&ProgramBuilder::new().ld(reg("A"), abs(10000)).brk())
        .run_to_halt();

    assert_eq!(ctx.byte(0), 40);
}

#[test]
fn load_through_pointer_plus_constant() {
    let program = ProgramBuilder::new()
        .ld(reg("ABC"), imm(10000, 3))
        .ld(reg("D"), ind_plus("ABC", 4))
        .brk();
    let ctx = TestContext::new()
        .with_memory(PRELOAD_AT, &PRELOAD)
        .load(&program)
        .run_to_halt();

    assert_eq!(ctx.wide(0, 3), 10000);
    assert_eq!(ctx.byte(3), 80);
}

#[test]
fn block_write_keeps_low_bytes_without_bleed() {
    let program = ProgramBuilder::new()
        .ld_block(abs(0x1000), imm(0x1122_3344, 4), 3, 1)
        .brk();
    let ctx = TestContext::new().load(&program).run_to_halt();

    assert_eq!(ctx.mem(0x1000), 0x22);
    assert_eq!(ctx.mem(0x1001), 0x33);
    assert_eq!(ctx.mem(0x1002), 0x44);
    assert_eq!(ctx.mem(0x0FFF), 0);
    assert_eq!(ctx.mem(0x1003), 0);
}

#[test]
fn push_single_register() {
    let program = ProgramBuilder::new()
        .ld(reg("A"), imm(0x44, 1))
        .push(reg("A"))
        .brk();
    let ctx = TestContext::new().load(&program).run_to_halt();

    assert_eq!(ctx.sp(), 1);
    assert_eq!(ctx.stack(0, 1), 0x44);
}

#[test]
fn push_ring_range_across_wide_registers() {
    let program = ProgramBuilder::new()
        .ld(reg("ABCD"), imm(0x0102_0304, 4))
        .ld(reg("EFGH"), imm(0x0506_0708, 4))
        .push_range("D", "G")
        .brk();
    let ctx = TestContext::new().load(&program).run_to_halt();

    assert_eq!(ctx.sp(), 4);
    assert_eq!(ctx.stack(0, 4), 0x0405_0607);
}
