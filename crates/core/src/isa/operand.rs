//! Addressing-mode descriptors.
//!
//! Every data-movement operand is one of eight modes. The set is closed: the
//! resolver matches on it exhaustively, so a new mode cannot be added without
//! every consumer handling it.

use crate::common::constants::{ADDR_FIELD_WIDTH, CONST_OFFSET_WIDTH};
use crate::common::error::VmError;

/// A wide register view: `width` ring slots starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegView {
    /// First (most significant) ring slot, 0-25.
    pub start: u8,
    /// View width in bytes, 1-4.
    pub width: u8,
}

impl RegView {
    /// Creates a view. Legality is checked by the decoder, not here.
    pub const fn new(start: u8, width: u8) -> Self {
        Self { start, width }
    }

    /// First slot as an index.
    #[inline(always)]
    pub const fn start(self) -> usize {
        self.start as usize
    }

    /// Width in bytes as a count.
    #[inline(always)]
    pub const fn width(self) -> usize {
        self.width as usize
    }
}

/// Whether an offset is added to or subtracted from the base address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetDir {
    /// `base + offset`
    Add,
    /// `base - offset`
    Sub,
}

impl OffsetDir {
    /// Applies the direction to a signed offset.
    #[inline(always)]
    pub const fn apply(self, base: i64, offset: i64) -> i64 {
        match self {
            Self::Add => base + offset,
            Self::Sub => base - offset,
        }
    }

    /// Encoded byte.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Add => 0,
            Self::Sub => 1,
        }
    }

    /// Decodes the direction byte.
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Add),
            1 => Some(Self::Sub),
            _ => None,
        }
    }
}

/// Operand addressing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Literal value with its declared width in bytes.
    Immediate {
        /// The literal.
        value: u32,
        /// Declared width, 1-4.
        width: u8,
    },
    /// Wide register view.
    Register(RegView),
    /// `(addr)`
    Absolute(u32),
    /// `(addr +/- k)`
    AbsoluteConstOffset {
        /// Base address.
        addr: u32,
        /// Add or subtract.
        dir: OffsetDir,
        /// Unsigned constant.
        k: u32,
    },
    /// `(addr +/- R)`, `R` read as signed at its own width.
    AbsoluteRegOffset {
        /// Base address.
        addr: u32,
        /// Add or subtract.
        dir: OffsetDir,
        /// Offset register view.
        offset: RegView,
    },
    /// `(R)`
    Indirect(RegView),
    /// `(R +/- k)`
    IndirectConstOffset {
        /// Register holding the base address.
        base: RegView,
        /// Add or subtract.
        dir: OffsetDir,
        /// Unsigned constant.
        k: u32,
    },
    /// `(R +/- S)`, `S` read as signed at its own width.
    IndirectRegOffset {
        /// Register holding the base address.
        base: RegView,
        /// Add or subtract.
        dir: OffsetDir,
        /// Offset register view.
        offset: RegView,
    },
}

impl Operand {
    /// Returns `true` for the six modes that name a memory location.
    pub const fn is_memory(&self) -> bool {
        !matches!(self, Self::Immediate { .. } | Self::Register(_))
    }

    /// Width the operand carries on its own: register width or immediate width.
    /// Memory operands have none.
    pub const fn natural_width(&self) -> Option<usize> {
        match self {
            Self::Immediate { width, .. } => Some(*width as usize),
            Self::Register(view) => Some(view.width()),
            _ => None,
        }
    }

    /// Tag byte for this mode.
    pub const fn tag(&self) -> OperandTag {
        match self {
            Self::Immediate { .. } => OperandTag::Immediate,
            Self::Register(_) => OperandTag::Register,
            Self::Absolute(_) => OperandTag::Absolute,
            Self::AbsoluteConstOffset { .. } => OperandTag::AbsoluteConstOffset,
            Self::AbsoluteRegOffset { .. } => OperandTag::AbsoluteRegOffset,
            Self::Indirect(_) => OperandTag::Indirect,
            Self::IndirectConstOffset { .. } => OperandTag::IndirectConstOffset,
            Self::IndirectRegOffset { .. } => OperandTag::IndirectRegOffset,
        }
    }

    /// Encoded byte size of this operand (tag byte + payload).
    pub const fn size(&self) -> usize {
        1 + match self {
            Self::Immediate { width, .. } => 1 + *width as usize,
            Self::Register(_) | Self::Indirect(_) => 2,
            Self::Absolute(_) => ADDR_FIELD_WIDTH,
            Self::AbsoluteConstOffset { .. } => ADDR_FIELD_WIDTH + 1 + CONST_OFFSET_WIDTH,
            Self::AbsoluteRegOffset { .. } => ADDR_FIELD_WIDTH + 1 + 2,
            Self::IndirectConstOffset { .. } => 2 + 1 + CONST_OFFSET_WIDTH,
            Self::IndirectRegOffset { .. } => 2 + 1 + 2,
        }
    }
}

/// Operand tag bytes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandTag {
    /// [`Operand::Immediate`]
    Immediate = 0,
    /// [`Operand::Register`]
    Register = 1,
    /// [`Operand::Absolute`]
    Absolute = 2,
    /// [`Operand::AbsoluteConstOffset`]
    AbsoluteConstOffset = 3,
    /// [`Operand::AbsoluteRegOffset`]
    AbsoluteRegOffset = 4,
    /// [`Operand::Indirect`]
    Indirect = 5,
    /// [`Operand::IndirectConstOffset`]
    IndirectConstOffset = 6,
    /// [`Operand::IndirectRegOffset`]
    IndirectRegOffset = 7,
}

impl TryFrom<u8> for OperandTag {
    type Error = VmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Immediate),
            1 => Ok(Self::Register),
            2 => Ok(Self::Absolute),
            3 => Ok(Self::AbsoluteConstOffset),
            4 => Ok(Self::AbsoluteRegOffset),
            5 => Ok(Self::Indirect),
            6 => Ok(Self::IndirectConstOffset),
            7 => Ok(Self::IndirectRegOffset),
            _ => Err(VmError::InvalidAddressingMode { tag: value, pc: 0 }),
        }
    }
}
