//! Circular General-Purpose Register Ring.
//!
//! This module implements the 26-slot one-byte register ring. It performs the following:
//! 1. **Storage:** Maintains the byte registers `A`-`Z` as a fixed array.
//! 2. **Wide Views:** Composes and decomposes 1-4 byte big-endian views that wrap past `Z`.
//! 3. **Debugging:** Provides utilities for dumping the ring state.

use crate::common::constants::{MAX_REG_WIDTH, RING_NAMES, RING_SIZE};

/// The general-purpose register ring.
///
/// A wide view `(start, width)` occupies slots `start, start+1, ...` modulo
/// [`RING_SIZE`], with the byte at `start` most significant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ring {
    slots: [u8; RING_SIZE],
}

/// Ring slot holding byte `offset` of the view starting at `start`.
#[inline(always)]
pub const fn slot(start: usize, offset: usize) -> usize {
    (start + offset) % RING_SIZE
}

/// Ring indices from `first` to `last` inclusive, wrapping past `Z`.
///
/// `first == last` yields a single index.
pub fn range(first: usize, last: usize) -> impl Iterator<Item = usize> {
    let len = (last + RING_SIZE - first) % RING_SIZE + 1;
    (0..len).map(move |off| slot(first, off))
}

/// Panics unless `(start, width)` names a legal view.
#[inline(always)]
fn check_view(start: usize, width: usize) {
    assert!(start < RING_SIZE, "ring start {start} out of range");
    assert!(
        (1..=MAX_REG_WIDTH).contains(&width),
        "register width {width} out of range"
    );
}

impl Ring {
    /// Creates a ring with every slot zeroed.
    pub const fn new() -> Self {
        Self {
            slots: [0; RING_SIZE],
        }
    }

    /// Reads one slot.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= RING_SIZE`.
    pub fn get(&self, idx: usize) -> u8 {
        self.slots[idx]
    }

    /// Writes one slot.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= RING_SIZE`.
    pub fn set(&mut self, idx: usize, val: u8) {
        self.slots[idx] = val;
    }

    /// Composes the big-endian value of the view `(start, width)`.
    ///
    /// # Panics
    ///
    /// Panics if `start >= RING_SIZE` or `width` is not in `1..=4`.
    pub fn get_wide(&self, start: usize, width: usize) -> u32 {
        check_view(start, width);
        (0..width).fold(0u32, |acc, off| {
            (acc << 8) | u32::from(self.slots[slot(start, off)])
        })
    }

    /// Decomposes `val` into the view `(start, width)`.
    ///
    /// Bytes are written in ascending offset order, most significant first.
    /// Bits above `width` bytes are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `start >= RING_SIZE` or `width` is not in `1..=4`.
    pub fn set_wide(&mut self, start: usize, width: usize, val: u32) {
        check_view(start, width);
        for off in 0..width {
            let shift = 8 * (width - 1 - off);
            self.slots[slot(start, off)] = (val >> shift) as u8;
        }
    }

    /// Returns the raw slot array.
    pub const fn as_bytes(&self) -> &[u8; RING_SIZE] {
        &self.slots
    }

    /// Dumps the ring to stdout, one row of thirteen registers per line.
    pub fn dump(&self) {
        for (r, bytes) in self.slots.chunks(RING_SIZE / 2).enumerate() {
            let line: Vec<String> = bytes
                .iter()
                .enumerate()
                .map(|(i, b)| format!("{}={:#04x}", RING_NAMES[r * RING_SIZE / 2 + i], b))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}
