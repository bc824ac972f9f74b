//! # Builders
//!
//! Fluent constructors for bytecode programs and their operands.

/// Program builder and operand shorthands.
pub mod program;
