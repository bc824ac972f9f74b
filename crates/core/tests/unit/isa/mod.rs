//! # ISA Unit Tests
//!
//! Tests for the bytecode contract shared with the assembler.
