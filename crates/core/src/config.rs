//! Configuration system for the virtual CPU.
//!
//! This module defines the configuration structures used to parameterize the
//! machine. It provides:
//! 1. **Defaults:** Baseline memory size, stack placement, and cycle budget.
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Validation:** Rejects layouts where the stack does not fit in memory.
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use serde::Deserialize;

use crate::common::error::{Result, VmError};
use crate::core::units::StackRegion;

/// Default configuration constants for the machine.
mod defaults {
    /// Total size of the flat address space (1 MiB).
    ///
    /// Covers every address the reference programs touch (up to `0x90000`).
    pub const MEMORY_SIZE: usize = 0x10_0000;

    /// Memory address of the first data-stack byte.
    pub const STACK_BASE: u32 = 0x000F_0000;

    /// Data-stack capacity in bytes (64 KiB).
    pub const STACK_SIZE: u32 = 0x0001_0000;

    /// Instructions a single `run` may execute before faulting.
    pub const MAX_CYCLES: u64 = 1 << 24;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use ringvm_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "memory": { "size": 65536, "stack_base": 61440, "stack_size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.memory.stack_base, 0xF000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General execution settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory and stack layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the address space is 32-bit addressable and that the stack
    /// region lies inside it.
    pub fn validate(&self) -> Result<()> {
        let size = self.memory.size as u64;
        if size > u64::from(u32::MAX) + 1 {
            return Err(VmError::InvalidConfig(format!(
                "memory size {size:#x} exceeds the 32-bit address space"
            )));
        }
        let stack_end = u64::from(self.memory.stack_base) + u64::from(self.memory.stack_size);
        if stack_end > size {
            return Err(VmError::InvalidConfig(format!(
                "stack region {:#x}..{stack_end:#x} lies outside memory of size {size:#x}",
                self.memory.stack_base
            )));
        }
        Ok(())
    }

    /// Stack placement as used by the stack engine.
    pub const fn stack_region(&self) -> StackRegion {
        StackRegion {
            base: self.memory.stack_base,
            size: self.memory.stack_size,
        }
    }
}

/// General execution settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at `info` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Instruction budget per `run`; `null` disables the guard
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default instruction budget.
    #[allow(clippy::unnecessary_wraps)]
    const fn default_max_cycles() -> Option<u64> {
        Some(defaults::MAX_CYCLES)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: Self::default_max_cycles(),
        }
    }
}

/// Memory and stack layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Address space size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Address of stack offset 0
    #[serde(default = "MemoryConfig::default_stack_base")]
    pub stack_base: u32,

    /// Stack capacity in bytes
    #[serde(default = "MemoryConfig::default_stack_size")]
    pub stack_size: u32,
}

impl MemoryConfig {
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    const fn default_stack_base() -> u32 {
        defaults::STACK_BASE
    }

    const fn default_stack_size() -> u32 {
        defaults::STACK_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            stack_base: defaults::STACK_BASE,
            stack_size: defaults::STACK_SIZE,
        }
    }
}
