//! # SoC Unit Tests
