//! Architectural register storage.
//!
//! This module contains the raw register banks of the machine:
//! 1. **Ring:** The 26-slot circular byte register file with wide views.
//! 2. **FPRs:** The single-precision float register bank.

/// Floating-point register bank.
pub mod fpr;

/// Circular general-purpose register ring.
pub mod ring;
