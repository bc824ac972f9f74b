//! Architectural state snapshots.
//!
//! A [`Snapshot`] captures everything a program can observe: the ring, the
//! float bank, the special registers, the run state, and a digest of memory.
//! Two runs of the same program from the same state produce equal snapshots.

use serde::{Deserialize, Serialize};

use crate::common::constants::{FPR_COUNT, RING_SIZE};
use crate::common::error::Result;
use crate::core::{Cpu, CpuState};

/// Serializable view of the machine after (or during) a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Register ring contents, `A` first.
    pub ring: [u8; RING_SIZE],
    /// Float registers as raw IEEE-754 bits.
    pub fregs: [u32; FPR_COUNT],
    /// Data-stack pointer.
    pub sp: u32,
    /// Call-stack pointer.
    pub call_sp: u32,
    /// Program counter.
    pub pc: u32,
    /// Run state.
    pub state: CpuState,
    /// FNV-1a digest over all of memory.
    pub memory_digest: u64,
}

impl Snapshot {
    /// Captures the state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        let mut fregs = [0u32; FPR_COUNT];
        for (idx, slot) in fregs.iter_mut().enumerate() {
            *slot = cpu.regs.read_f(idx);
        }
        Self {
            ring: *cpu.regs.ring(),
            fregs,
            sp: cpu.regs.sp(),
            call_sp: cpu.regs.call_sp(),
            pc: cpu.regs.pc(),
            state: cpu.state,
            memory_digest: fnv1a(cpu.mem.get_range(0, cpu.mem.len()).unwrap_or_default()),
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot back from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}
