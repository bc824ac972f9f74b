//! Run Control Tests.
//!
//! State transitions (`Idle`, `Running`, `Halted`, `Faulted`), single
//! stepping, faults that stop a run, the instruction budget, and reset.

use ringvm_core::config::Config;
use ringvm_core::common::VmError;
use ringvm_core::CpuState;

use crate::common::TestContext;
use crate::common::builder::program::{ProgramBuilder, abs, abs_minus, imm, reg};

#[test]
fn fresh_cpu_is_idle() {
    let ctx = TestContext::new();
    assert_eq!(ctx.sim.state(), CpuState::Idle);
    assert_eq!(ctx.sim.pc(), 0);
}

#[test]
fn pc_advances_past_break() {
    let program = ProgramBuilder::new().ld(reg("A"), imm(1, 1)).brk();
    let len = program.build().len() as u32;
    let ctx = TestContext::new().load(&program).run_to_halt();
    assert_eq!(ctx.sim.pc(), len);
    assert_eq!(ctx.cpu().stats.instructions_retired, 2);
}

#[test]
fn stepping_walks_one_instruction_at_a_time() {
    let program = ProgramBuilder::new()
        .ld(reg("A"), imm(1, 1))
        .ld(reg("B"), imm(2, 1))
        .brk();
    let mut ctx = TestContext::new().load(&program);

    assert_eq!(ctx.sim.step().unwrap(), CpuState::Running);
    assert_eq!(ctx.byte(0), 1);
    assert_eq!(ctx.byte(1), 0);
    assert_eq!(ctx.sim.step().unwrap(), CpuState::Running);
    assert_eq!(ctx.sim.step().unwrap(), CpuState::Halted);
    assert!(matches!(
        ctx.sim.step(),
        Err(VmError::NotRunnable {
            state: CpuState::Halted
        })
    ));
}

#[test]
fn run_continues_after_stepping() {
    let program = ProgramBuilder::new()
        .ld(reg("A"), imm(1, 1))
        .ld(reg("B"), imm(2, 1))
        .ld(reg("C"), imm(3, 1))
        .brk();
    let mut ctx = TestContext::new().load(&program);

    assert_eq!(ctx.sim.step().unwrap(), CpuState::Running);
    ctx.run().unwrap();
    assert_eq!(ctx.sim.state(), CpuState::Halted);
    assert_eq!(ctx.wide(0, 3), 0x01_0203);
    assert_eq!(ctx.cpu().stats.instructions_retired, 4);
}

#[test]
fn run_refuses_a_stopped_cpu() {
    let mut ctx = TestContext::new()
        .load(&ProgramBuilder::new().brk())
        .run_to_halt();
    assert!(matches!(
        ctx.run(),
        Err(VmError::NotRunnable {
            state: CpuState::Halted
        })
    ));
}

#[test]
fn unknown_opcode_faults() {
    let mut ctx = TestContext::new().load_bytes(&[0xEE]);
    assert!(matches!(
        ctx.run(),
        Err(VmError::InvalidOpcode { opcode: 0xEE, pc: 0 })
    ));
    assert_eq!(ctx.sim.state(), CpuState::Faulted);
}

#[test]
fn running_off_the_end_faults() {
    let program = ProgramBuilder::new().ld(reg("A"), imm(1, 1));
    let end = program.build().len() as u32;
    let mut ctx = TestContext::new().load(&program);
    assert!(matches!(
        ctx.run(),
        Err(VmError::UnexpectedEndOfBytecode { pc }) if pc == end
    ));
    assert_eq!(ctx.byte(0), 1);
}

#[test]
fn memory_past_end_faults() {
    let config = Config::from_json(
        r#"{ "memory": { "size": 256, "stack_base": 128, "stack_size": 128 } }"#,
    )
    .unwrap();
    let program = ProgramBuilder::new().ld(reg("AB"), abs(255)).brk();
    let mut ctx = TestContext::with_config(&config).load(&program);
    assert!(matches!(
        ctx.run(),
        Err(VmError::MemoryFault {
            addr: 255,
            len: 2,
            size: 256
        })
    ));
}

#[test]
fn address_underflow_faults() {
    let program = ProgramBuilder::new().ld(reg("A"), abs_minus(1, 2)).brk();
    let mut ctx = TestContext::new().load(&program);
    assert!(matches!(
        ctx.run(),
        Err(VmError::AddressOutOfRange { address: -1 })
    ));
    assert_eq!(ctx.sim.state(), CpuState::Faulted);
}

#[test]
fn cycle_guard_stops_runaway_programs() {
    let config = Config::from_json(r#"{ "general": { "max_cycles": 3 } }"#).unwrap();
    let program = ProgramBuilder::new()
        .ld(reg("A"), imm(1, 1))
        .ld(reg("A"), imm(2, 1))
        .ld(reg("A"), imm(3, 1))
        .ld(reg("A"), imm(4, 1))
        .brk();
    let mut ctx = TestContext::with_config(&config).load(&program);
    assert!(matches!(
        ctx.run(),
        Err(VmError::CycleLimitExceeded { limit: 3 })
    ));
    assert_eq!(ctx.byte(0), 3);
    assert_eq!(ctx.sim.state(), CpuState::Faulted);
}

#[test]
fn budget_covers_exactly_fitting_programs() {
    let config = Config::from_json(r#"{ "general": { "max_cycles": 2 } }"#).unwrap();
    let program = ProgramBuilder::new().ld(reg("A"), imm(9, 1)).brk();
    let ctx = TestContext::with_config(&config)
        .load(&program)
        .run_to_halt();
    assert_eq!(ctx.byte(0), 9);
}

#[test]
fn reset_keeps_memory_and_program() {
    let program = ProgramBuilder::new()
        .ld(reg("A"), abs(0x10))
        .ld(abs(0x10), imm(0x99, 1))
        .brk();
    let mut ctx = TestContext::new()
        .with_memory(0x10, &[0x11])
        .load(&program)
        .run_to_halt();
    assert_eq!(ctx.byte(0), 0x11);

    ctx.sim.reset();
    assert_eq!(ctx.sim.state(), CpuState::Idle);
    assert_eq!(ctx.byte(0), 0);
    assert_eq!(ctx.sim.pc(), 0);
    assert_eq!(ctx.mem(0x10), 0x99);

    let ctx = ctx.run_to_halt();
    assert_eq!(ctx.byte(0), 0x99);
}
