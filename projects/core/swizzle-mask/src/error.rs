//! Error types for swizzle mask operations.

use crate::axis::Axis;
use crate::dimension::Dimension;
use thiserror::Error;

/// Errors that can occur when building, validating or applying swizzle masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwizzleError {
    /// A selector in the mask names a component the source does not have.
    #[error("Selector {axis:?} in slot {slot} is out of range for a {dimension:?} source.")]
    SelectorOutOfRange {
        /// The target slot holding the offending selector
        slot: usize,
        /// The decoded selector
        axis: Axis,
        /// The dimension of the source the mask was applied to
        dimension: Dimension,
    },

    /// Bits above the last target slot are set.
    #[error("Mask 0x{mask:02X} has bits set beyond its {target:?} target slots.")]
    UnusedBitsSet {
        /// The raw mask value
        mask: u8,
        /// The target dimension the mask was validated against
        target: Dimension,
    },

    /// A mask can hold between 1 and 4 selectors.
    #[error("Invalid selector count: {0}. A mask holds between 1 and 4 selectors.")]
    InvalidSelectorCount(usize),

    /// Vectors are 2, 3 or 4 components wide.
    #[error("Invalid dimension: {0}. Valid dimensions are 2, 3 and 4.")]
    InvalidDimension(u8),

    /// A character in a symbolic name is not an axis label.
    #[error("Invalid axis label: '{0}'. Valid labels are X, Y, Z and W.")]
    InvalidAxisLabel(char),

    /// A symbolic name does not have one letter per target component.
    #[error("Name has {actual} letters, but the target has {expected} components.")]
    NameLengthMismatch {
        /// The target dimension
        expected: usize,
        /// The number of letters in the name
        actual: usize,
    },
}
