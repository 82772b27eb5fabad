//! Axis selectors, the 2-bit values that name one source component.

use crate::error::SwizzleError;
use derive_enum_all_values::AllValues;

/// Names one of up to four source components.
///
/// The discriminant is the 2-bit value stored in each slot of a [`PackedMask`].
///
/// [`PackedMask`]: crate::PackedMask
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
#[repr(u8)]
pub enum Axis {
    /// First component (`00`)
    X = 0,
    /// Second component (`01`)
    Y = 1,
    /// Third component (`10`)
    Z = 2,
    /// Fourth component (`11`)
    W = 3,
}

impl Axis {
    /// Creates an axis from the low 2 bits of `bits`. Higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::X,
            1 => Self::Y,
            2 => Self::Z,
            _ => Self::W,
        }
    }

    /// Returns the 2-bit value of this axis.
    #[inline]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }

    /// Index of the source component this axis reads.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The letter used for this axis in symbolic mask names.
    pub const fn label(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
            Self::W => 'W',
        }
    }

    /// Parses an axis letter. Both cases are accepted.
    pub fn from_label(label: char) -> Result<Self, SwizzleError> {
        match label.to_ascii_uppercase() {
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            'W' => Ok(Self::W),
            _ => Err(SwizzleError::InvalidAxisLabel(label)),
        }
    }
}

impl From<Axis> for u8 {
    fn from(axis: Axis) -> Self {
        axis.to_bits()
    }
}
