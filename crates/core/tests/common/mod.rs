//! # Test Infrastructure
//!
//! Builders and the execution harness shared by every test module.

/// Program and operand builders.
pub mod builder;


pub use builder::program::ProgramBuilder;
pub use harness::TestContext;
