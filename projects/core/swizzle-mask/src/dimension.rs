//! Component counts of source and target vectors.

use crate::axis::Axis;
use crate::error::SwizzleError;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// Number of components in a vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
#[repr(u8)]
pub enum Dimension {
    /// Two components (`X`, `Y`)
    Two = 2,
    /// Three components (`X`, `Y`, `Z`)
    Three = 3,
    /// Four components (`X`, `Y`, `Z`, `W`)
    Four = 4,
}

impl Dimension {
    /// Converts a component count into a [`Dimension`].
    pub const fn from_u8(value: u8) -> Result<Self, SwizzleError> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(SwizzleError::InvalidDimension(value)),
        }
    }

    /// Number of components.
    #[inline]
    pub const fn len(self) -> usize {
        self as usize
    }

    /// The axes a source of this dimension can be read from, in order.
    pub fn axes(self) -> &'static [Axis] {
        &Axis::all_values()[..self.len()]
    }

    /// Whether `axis` names a component of a vector with this dimension.
    #[inline]
    pub const fn contains(self, axis: Axis) -> bool {
        axis.index() < self.len()
    }
}

impl TryFrom<usize> for Dimension {
    type Error = SwizzleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(value) => Self::from_u8(value),
            Err(_) => Err(SwizzleError::InvalidDimension(u8::MAX)),
        }
    }
}

impl FromStr for Dimension {
    type Err = SwizzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            other => Err(SwizzleError::InvalidDimension(
                other.parse::<u8>().unwrap_or(u8::MAX),
            )),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())
    }
}

/// An ordered (source, target) pair of dimensions.
///
/// Each pair owns one [`NamedMaskTable`] with `source^target` entries.
///
/// [`NamedMaskTable`]: crate::table::NamedMaskTable
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionPair {
    /// Dimension of the vector components are read from
    pub source: Dimension,
    /// Dimension of the vector being built
    pub target: Dimension,
}

impl DimensionPair {
    /// Creates a new pair.
    pub const fn new(source: Dimension, target: Dimension) -> Self {
        Self { source, target }
    }

    /// All 9 pairs, ordered by source then target.
    pub fn all() -> impl Iterator<Item = Self> {
        Dimension::all_values().iter().flat_map(|source| {
            Dimension::all_values()
                .iter()
                .map(move |target| Self::new(*source, *target))
        })
    }

    /// Number of distinct masks for this pair (`source^target`).
    pub const fn table_len(self) -> usize {
        self.source.len().pow(self.target.len() as u32)
    }

    /// Index of this pair in [`DimensionPair::all`].
    pub const fn index(self) -> usize {
        (self.source.len() - 2) * Dimension::all_values().len() + (self.target.len() - 2)
    }

    /// Snake case name used for generated modules, e.g. `d2_d3`.
    pub fn module_name(self) -> alloc::string::String {
        alloc::format!("d{}_d{}", self.source, self.target)
    }
}

impl fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D -> {}D", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, Dimension::Two)]
    #[case(3, Dimension::Three)]
    #[case(4, Dimension::Four)]
    fn can_convert_component_counts(#[case] value: u8, #[case] expected: Dimension) {
        assert_eq!(Dimension::from_u8(value), Ok(expected));
        assert_eq!(expected.len(), value as usize);
        assert_eq!(value.to_string().parse::<Dimension>(), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn rejects_unsupported_counts(#[case] value: u8) {
        assert_eq!(
            Dimension::from_u8(value),
            Err(SwizzleError::InvalidDimension(value))
        );
    }

    #[test]
    fn axes_are_prefix_of_all_axes() {
        assert_eq!(Dimension::Two.axes(), &[Axis::X, Axis::Y]);
        assert_eq!(Dimension::Three.axes(), &[Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(Dimension::Four.axes(), &[Axis::X, Axis::Y, Axis::Z, Axis::W]);
        assert!(!Dimension::Three.contains(Axis::W));
        assert!(Dimension::Four.contains(Axis::W));
    }

    #[test]
    fn all_pairs_are_ordered_and_indexed() {
        let pairs: Vec<_> = DimensionPair::all().collect();
        assert_eq!(pairs.len(), 9);
        for (index, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.index(), index);
        }
        assert_eq!(pairs[0], DimensionPair::new(Dimension::Two, Dimension::Two));
        assert_eq!(pairs[8], DimensionPair::new(Dimension::Four, Dimension::Four));
    }

    #[rstest]
    #[case(Dimension::Two, Dimension::Two, 4)]
    #[case(Dimension::Two, Dimension::Three, 8)]
    #[case(Dimension::Two, Dimension::Four, 16)]
    #[case(Dimension::Three, Dimension::Two, 9)]
    #[case(Dimension::Three, Dimension::Three, 27)]
    #[case(Dimension::Three, Dimension::Four, 81)]
    #[case(Dimension::Four, Dimension::Two, 16)]
    #[case(Dimension::Four, Dimension::Three, 64)]
    #[case(Dimension::Four, Dimension::Four, 256)]
    fn table_len_is_source_pow_target(
        #[case] source: Dimension,
        #[case] target: Dimension,
        #[case] expected: usize,
    ) {
        assert_eq!(DimensionPair::new(source, target).table_len(), expected);
    }

    #[test]
    fn module_name_is_snake_case() {
        let pair = DimensionPair::new(Dimension::Three, Dimension::Four);
        assert_eq!(pair.module_name(), "d3_d4");
    }
}
