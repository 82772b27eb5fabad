//! Masks bound to a single (source, target) dimension pair.

use crate::axis::Axis;
use crate::builder::{Mask2D, Mask3D, Mask4D};
use crate::dimension::{Dimension, DimensionPair};
use crate::error::SwizzleError;
use crate::mask::{PackedMask, SLOT_BITS};
use alloc::string::String;
use core::fmt;

/// A [`PackedMask`] known to be valid for a `SOURCE` component input and a
/// `TARGET` component output.
///
/// Every selector in slots `0..TARGET` names one of the first `SOURCE` components and
/// all bits above the last target slot are zero. This makes [`swizzle`] infallible and
/// lets the compiler check the source dimension.
///
/// This is the typed counterpart of the entries in a [`NamedMaskTable`]; the source
/// emitted by [`RustSource`] declares one constant of this type per entry.
///
/// [`swizzle`]: crate::gather::swizzle
/// [`NamedMaskTable`]: crate::table::NamedMaskTable
/// [`RustSource`]: crate::table::codegen::RustSource
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairMask<const SOURCE: usize, const TARGET: usize>(PackedMask);

impl<const SOURCE: usize, const TARGET: usize> PairMask<SOURCE, TARGET> {
    /// Dimension of the input vector.
    pub const SOURCE_DIMENSION: Dimension = match Dimension::from_u8(SOURCE as u8) {
        Ok(dimension) if SOURCE <= 4 => dimension,
        _ => panic!("source dimension must be 2, 3 or 4"),
    };

    /// Dimension of the output vector.
    pub const TARGET_DIMENSION: Dimension = match Dimension::from_u8(TARGET as u8) {
        Ok(dimension) if TARGET <= 4 => dimension,
        _ => panic!("target dimension must be 2, 3 or 4"),
    };

    /// The dimension pair this mask belongs to.
    pub const PAIR: DimensionPair =
        DimensionPair::new(Self::SOURCE_DIMENSION, Self::TARGET_DIMENSION);

    /// Validates `mask` for this dimension pair.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::SelectorOutOfRange`] if a target slot reads past the source
    /// - [`SwizzleError::UnusedBitsSet`] if bits above the last target slot are set
    pub fn new(mask: PackedMask) -> Result<Self, SwizzleError> {
        mask.check_selectors(Self::SOURCE_DIMENSION, Self::TARGET_DIMENSION)?;
        if !mask.is_canonical(Self::TARGET_DIMENSION) {
            return Err(SwizzleError::UnusedBitsSet {
                mask: mask.raw(),
                target: Self::TARGET_DIMENSION,
            });
        }

        Ok(Self(mask))
    }

    /// Creates a mask from a raw byte in a const context.
    ///
    /// # Panics
    ///
    /// If `raw` is not valid for this pair. In a `const` item this is a compile error.
    pub const fn from_raw(raw: u8) -> Self {
        assert!(Self::is_valid(raw), "mask is not valid for this dimension pair");
        Self(PackedMask::new(raw))
    }

    /// Returns `true` if `raw` would be accepted by [`PairMask::new`].
    pub const fn is_valid(raw: u8) -> bool {
        if !PackedMask::new(raw).is_canonical(Self::TARGET_DIMENSION) {
            return false;
        }

        let mut slot = 0;
        while slot < TARGET {
            let selector = (raw >> (SLOT_BITS * slot)) & 0b11;
            if selector as usize >= SOURCE {
                return false;
            }
            slot += 1;
        }
        true
    }

    /// The untyped mask.
    #[inline]
    pub const fn mask(self) -> PackedMask {
        self.0
    }

    /// The raw mask byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0.raw()
    }

    /// The selector of every target component, lowest slot first.
    pub fn selectors(self) -> [Axis; TARGET] {
        core::array::from_fn(|slot| self.0.decode_one(slot))
    }

    /// Symbolic name, e.g. `"XYX"`.
    pub fn name(self) -> String {
        self.0.name(Self::TARGET_DIMENSION)
    }
}

impl<const SOURCE: usize, const TARGET: usize> From<PairMask<SOURCE, TARGET>> for PackedMask {
    fn from(mask: PairMask<SOURCE, TARGET>) -> Self {
        mask.0
    }
}

impl<const SOURCE: usize, const TARGET: usize> TryFrom<PackedMask> for PairMask<SOURCE, TARGET> {
    type Error = SwizzleError;

    fn try_from(mask: PackedMask) -> Result<Self, Self::Error> {
        Self::new(mask)
    }
}

impl<const SOURCE: usize> TryFrom<Mask2D> for PairMask<SOURCE, 2> {
    type Error = SwizzleError;

    fn try_from(builder: Mask2D) -> Result<Self, Self::Error> {
        Self::new(builder.to_mask())
    }
}

impl<const SOURCE: usize> TryFrom<Mask3D> for PairMask<SOURCE, 3> {
    type Error = SwizzleError;

    fn try_from(builder: Mask3D) -> Result<Self, Self::Error> {
        Self::new(builder.to_mask())
    }
}

impl<const SOURCE: usize> TryFrom<Mask4D> for PairMask<SOURCE, 4> {
    type Error = SwizzleError;

    fn try_from(builder: Mask4D) -> Result<Self, Self::Error> {
        Self::new(builder.to_mask())
    }
}

impl<const SOURCE: usize, const TARGET: usize> fmt::Display for PairMask<SOURCE, TARGET> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}_D{}::{} ({})", SOURCE, TARGET, self.name(), self.0)
    }
}
