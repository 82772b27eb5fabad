//! # Packed Mask Layout
//!
//! A swizzle is described by a single byte. Each target component owns a 2-bit
//! field holding the [`Axis`] it is read from:
//!
//! ```text
//! Bit:     7   6   5   4   3   2   1   0
//!        +-------+-------+-------+-------+
//! Slot:  |   3   |   2   |   1   |   0   |
//!        +-------+-------+-------+-------+
//! ```
//!
//! Slot `k` lives at bit offset `2 * k`, so the first target component is stored in
//! the lowest bits. A mask for an `M` component target only uses the low `2 * M` bits.
//!
//! Two bits per slot is exactly enough to name any of the 4 components of the widest
//! source, which means any byte decodes to *some* selection. Whether the selection is
//! in range for a narrower source is a separate question, answered by
//! [`PackedMask::check_selectors`].

use crate::axis::Axis;
use crate::dimension::Dimension;
use crate::error::SwizzleError;
use alloc::string::String;
use bitfield::bitfield;
use core::fmt;

/// Maximum number of selectors a mask can hold.
pub const MAX_SLOTS: usize = 4;

/// Width of a single selector field, in bits.
pub const SLOT_BITS: usize = 2;

bitfield! {
    /// A byte holding up to four 2-bit [`Axis`] selectors.
    ///
    /// Bit layout:
    /// - Bits 0-1: Selector for target component 0
    /// - Bits 2-3: Selector for target component 1
    /// - Bits 4-5: Selector for target component 2
    /// - Bits 6-7: Selector for target component 3
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
    pub struct PackedMask(u8);
    impl Debug;
    u8;

    /// Raw 2-bit selector of each slot (4 slots, 2 bits each)
    pub selector, set_selector: 1, 0, 4;
}

impl PackedMask {
    /// Wraps a raw mask byte. Every byte is a valid [`PackedMask`].
    #[inline]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw mask byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Packs `M` selectors, placing selector `k` at bit offset `2 * k`.
    ///
    /// `M` must be between 1 and 4; this is checked at compile time.
    ///
    /// ```
    /// use swizzle_mask::{Axis, PackedMask};
    ///
    /// let mask = PackedMask::encode([Axis::Z, Axis::X, Axis::Z]);
    /// assert_eq!(mask.raw(), 0b10_00_10);
    /// ```
    pub fn encode<const M: usize>(selectors: [Axis; M]) -> Self {
        const { assert!(M >= 1 && M <= MAX_SLOTS, "a mask holds 1 to 4 selectors") };

        let mut mask = Self::default();
        for (slot, axis) in selectors.iter().enumerate() {
            mask.set_selector(slot, axis.to_bits());
        }
        mask
    }

    /// Packs a run-time list of selectors.
    ///
    /// # Errors
    ///
    /// [`SwizzleError::InvalidSelectorCount`] if `selectors` is empty or holds more than 4 axes.
    pub fn from_selectors(selectors: &[Axis]) -> Result<Self, SwizzleError> {
        if selectors.is_empty() || selectors.len() > MAX_SLOTS {
            return Err(SwizzleError::InvalidSelectorCount(selectors.len()));
        }

        let mut mask = Self::default();
        for (slot, axis) in selectors.iter().enumerate() {
            mask.set_selector(slot, axis.to_bits());
        }
        Ok(mask)
    }

    /// Extracts the selector of `slot`, i.e. `(mask >> (2 * slot)) & 0b11`.
    ///
    /// Defined for every slot regardless of the target dimension the mask was built for.
    ///
    /// # Panics
    ///
    /// If `slot >= 4`.
    #[inline]
    pub fn decode_one(self, slot: usize) -> Axis {
        Axis::from_bits(self.selector(slot))
    }

    /// Decodes slots `0..M`, lowest field first.
    pub fn decode<const M: usize>(self) -> [Axis; M] {
        const { assert!(M >= 1 && M <= MAX_SLOTS, "a mask holds 1 to 4 selectors") };
        core::array::from_fn(|slot| self.decode_one(slot))
    }

    /// Decodes the selectors of a 2 component target.
    pub fn decode2(self) -> (Axis, Axis) {
        let [x, y] = self.decode();
        (x, y)
    }

    /// Decodes the selectors of a 3 component target.
    pub fn decode3(self) -> (Axis, Axis, Axis) {
        let [x, y, z] = self.decode();
        (x, y, z)
    }

    /// Decodes the selectors of a 4 component target.
    pub fn decode4(self) -> (Axis, Axis, Axis, Axis) {
        let [x, y, z, w] = self.decode();
        (x, y, z, w)
    }

    /// Iterates over the selectors of the first `target` slots.
    pub fn selectors(self, target: Dimension) -> impl Iterator<Item = Axis> {
        (0..target.len()).map(move |slot| self.decode_one(slot))
    }

    /// Bits of the mask that are meaningful for a `target` component result.
    #[inline]
    pub const fn used_bits(target: Dimension) -> u8 {
        ((1u16 << (SLOT_BITS * target.len())) - 1) as u8
    }

    /// Returns `true` if no bits above the last `target` slot are set.
    ///
    /// Masks produced by the encoder and the table generator are always canonical.
    #[inline]
    pub const fn is_canonical(self, target: Dimension) -> bool {
        self.0 & !Self::used_bits(target) == 0
    }

    /// Checks that every selector read for a `target` component result names a
    /// component of a `source` dimension vector.
    ///
    /// Bits beyond the target slots are not inspected.
    ///
    /// # Errors
    ///
    /// [`SwizzleError::SelectorOutOfRange`] for the first offending slot.
    pub fn check_selectors(self, source: Dimension, target: Dimension) -> Result<(), SwizzleError> {
        match self
            .selectors(target)
            .enumerate()
            .find(|(_, axis)| !source.contains(*axis))
        {
            Some((slot, axis)) => Err(SwizzleError::SelectorOutOfRange {
                slot,
                axis,
                dimension: source,
            }),
            None => Ok(()),
        }
    }

    /// Symbolic name of the mask for a `target` component result, e.g. `"XYX"`.
    ///
    /// The leftmost letter is slot 0.
    pub fn name(self, target: Dimension) -> String {
        self.selectors(target).map(Axis::label).collect()
    }
}

impl From<u8> for PackedMask {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<PackedMask> for u8 {
    fn from(mask: PackedMask) -> Self {
        mask.0
    }
}

impl fmt::Display for PackedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}
