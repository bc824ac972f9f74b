//! Data Stack Tests.
//!
//! The stack pointer counts bytes pushed since reset, values land big-endian,
//! and read-back works at any byte offset independently of the executor.

use ringvm_core::common::VmError;
use ringvm_core::config::Config;
use ringvm_core::core::units::stack::read_stack;
use ringvm_core::core::units::{StackEngine, StackRegion};
use ringvm_core::soc::Memory;

use crate::common::TestContext;
use crate::common::builder::program::{ProgramBuilder, imm, reg};

const REGION: StackRegion = StackRegion {
    base: 0x40,
    size: 16,
};

#[test]
fn pointer_counts_bytes_pushed() {
    let mut mem = Memory::new(0x80);
    let mut sp = 0;
    let mut stack = StackEngine::new(&mut mem, &mut sp, REGION);
    stack.push_value(0xAA, 1).unwrap();
    stack.push_value(0xBBCC, 2).unwrap();
    stack.push_value(0x00DD_EEFF, 3).unwrap();
    assert_eq!(sp, 6);
    assert_eq!(
        mem.get_range(0x40, 6).unwrap(),
        &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]
    );
}

#[test]
fn read_back_at_unaligned_offsets() {
    let mut mem = Memory::new(0x80);
    let mut sp = 0;
    StackEngine::new(&mut mem, &mut sp, REGION)
        .push_bytes(&[1, 2, 3, 4, 5])
        .unwrap();
    assert_eq!(read_stack(&mem, REGION, 1, 4).unwrap(), 0x0203_0405);
    assert_eq!(read_stack(&mem, REGION, 3, 2).unwrap(), 0x0405);
}

#[test]
fn full_stack_overflows() {
    let mut mem = Memory::new(0x80);
    let mut sp = 15;
    let mut stack = StackEngine::new(&mut mem, &mut sp, REGION);
    stack.push_value(1, 1).unwrap();
    assert!(matches!(
        stack.push_value(1, 1),
        Err(VmError::StackOverflow { sp: 16, width: 1 })
    ));
    assert_eq!(sp, 16);
}

#[test]
fn executor_overflow_faults_the_run() {
    let config = Config::from_json(
        r#"{ "memory": { "size": 4096, "stack_base": 4000, "stack_size": 3 } }"#,
    )
    .unwrap();
    let program = ProgramBuilder::new()
        .ld(reg("ABCD"), imm(0x0102_0304, 4))
        .push(reg("ABCD"))
        .brk();
    let mut ctx = TestContext::with_config(&config).load(&program);
    assert!(matches!(
        ctx.run(),
        Err(VmError::StackOverflow { sp: 0, width: 4 })
    ));
    assert_eq!(ctx.sp(), 0);
}
