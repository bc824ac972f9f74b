//! # Core Unit Tests
//!
//! This module organizes the tests for the processor core, from the register
//! ring up through full programs run by the executor.



/// Data stack growth, read-back, and bounds.
pub mod stack;

/// End-to-end reference scenarios.
pub mod scenarios;



/// Run control: states, faults, and the cycle guard.
pub mod run_control;
