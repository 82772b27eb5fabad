//! # Named Mask Tables
//!
//! For every [`DimensionPair`] there are exactly `source^target` distinct masks. Rather
//! than listing them by hand, they are generated here as read-only tables mapping a
//! symbolic name (one axis letter per target component) to its [`PackedMask`].
//!
//! ## Generation
//!
//! The table is the Cartesian product of the source axes over the target slots. At depth
//! `level`, each candidate axis `i` contributes `i << (2 * level)` to the value
//! accumulated by its parent, and appends its letter to the name. Once `level` reaches
//! the target dimension the `(name, value)` entry is emitted.
//!
//! This means the leftmost letter of a name is stored in the lowest bits:
//!
//! ```text
//! Name:  "X  X  Y"      (source 2, target 3)
//! Slot:   0  1  2
//! Value:  0 | 0 << 2 | 1 << 4 = 16
//! ```
//!
//! Entries are kept in generation order, i.e. sorted by name in `X, Y, Z, W` order.

pub mod codegen;

use crate::axis::Axis;
use crate::dimension::{Dimension, DimensionPair};
use crate::error::SwizzleError;
use crate::mask::{PackedMask, SLOT_BITS};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A single named mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedMask {
    /// Symbolic name, e.g. `"XYX"`. Leftmost letter is slot 0.
    pub name: String,
    /// The packed value.
    pub mask: PackedMask,
}

/// All masks of one [`DimensionPair`], addressable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMaskTable {
    pair: DimensionPair,
    entries: Vec<NamedMask>,
    by_name: BTreeMap<String, PackedMask>,
}

impl NamedMaskTable {
    /// The dimension pair the table was generated for.
    #[inline]
    pub fn pair(&self) -> DimensionPair {
        self.pair
    }

    /// Number of entries (`source^target`).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; every pair has at least 4 masks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a mask by name. Names are case sensitive and upper case.
    pub fn get(&self, name: &str) -> Option<PackedMask> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup of the name of `mask`.
    ///
    /// Returns [`None`] if the mask is not canonical for this pair.
    pub fn name_of(&self, mask: PackedMask) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.mask == mask)
            .map(|entry| entry.name.as_str())
    }

    /// Iterates entries in generation order.
    pub fn iter(&self) -> core::slice::Iter<'_, NamedMask> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a NamedMaskTable {
    type Item = &'a NamedMask;
    type IntoIter = core::slice::Iter<'a, NamedMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generates the table for `pair`.
pub fn generate_table(pair: DimensionPair) -> NamedMaskTable {
    let mut entries = Vec::with_capacity(pair.table_len());
    let mut name = String::with_capacity(pair.target.len());
    collect_entries(pair, &mut name, 0, 0, &mut entries);

    let by_name = entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.mask))
        .collect();

    NamedMaskTable {
        pair,
        entries,
        by_name,
    }
}

fn collect_entries(
    pair: DimensionPair,
    name: &mut String,
    value: u8,
    level: usize,
    entries: &mut Vec<NamedMask>,
) {
    if level == pair.target.len() {
        entries.push(NamedMask {
            name: name.clone(),
            mask: PackedMask::new(value),
        });
        return;
    }

    let shift = level * SLOT_BITS;
    for axis in pair.source.axes() {
        name.push(axis.label());
        collect_entries(
            pair,
            name,
            (axis.to_bits() << shift) | value,
            level + 1,
            entries,
        );
        name.pop();
    }
}

/// Parses a symbolic name into the mask it stands for in `pair`.
///
/// Lower case letters are accepted.
///
/// # Errors
///
/// - [`SwizzleError::NameLengthMismatch`] if the name is not one letter per target component
/// - [`SwizzleError::InvalidAxisLabel`] for a letter that is not `X`, `Y`, `Z` or `W`
/// - [`SwizzleError::SelectorOutOfRange`] for a letter naming a component the source lacks
pub fn parse_name(name: &str, pair: DimensionPair) -> Result<PackedMask, SwizzleError> {
    let actual = name.chars().count();
    if actual != pair.target.len() {
        return Err(SwizzleError::NameLengthMismatch {
            expected: pair.target.len(),
            actual,
        });
    }

    let mut selectors = [Axis::X; 4];
    for (slot, label) in name.chars().enumerate() {
        let axis = Axis::from_label(label)?;
        if !pair.source.contains(axis) {
            return Err(SwizzleError::SelectorOutOfRange {
                slot,
                axis,
                dimension: pair.source,
            });
        }
        selectors[slot] = axis;
    }

    PackedMask::from_selectors(&selectors[..actual])
}

/// The tables of all 9 dimension pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTables {
    tables: Vec<NamedMaskTable>,
}

impl MaskTables {
    /// Generates every table.
    pub fn generate() -> Self {
        Self {
            tables: DimensionPair::all().map(generate_table).collect(),
        }
    }

    /// The table of `pair`.
    #[inline]
    pub fn get(&self, pair: DimensionPair) -> &NamedMaskTable {
        &self.tables[pair.index()]
    }

    /// Looks up `name` in the table of (`source`, `target`).
    pub fn lookup(&self, source: Dimension, target: Dimension, name: &str) -> Option<PackedMask> {
        self.get(DimensionPair::new(source, target)).get(name)
    }

    /// Iterates tables in [`DimensionPair::all`] order.
    pub fn iter(&self) -> core::slice::Iter<'_, NamedMaskTable> {
        self.tables.iter()
    }
}

/// Process-wide tables, generated on first use.
#[cfg(feature = "std")]
pub fn tables() -> &'static MaskTables {
    static TABLES: std::sync::OnceLock<MaskTables> = std::sync::OnceLock::new();
    TABLES.get_or_init(MaskTables::generate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn table_2d_to_2d_matches_reference() {
        let table = generate_table(DimensionPair::new(Dimension::Two, Dimension::Two));
        let entries: Vec<_> = table
            .iter()
            .map(|entry| (entry.name.as_str(), entry.mask.raw()))
            .collect();
        assert_eq!(entries, [("XX", 0), ("XY", 4), ("YX", 1), ("YY", 5)]);
    }

    #[rstest]
    #[case("XXY", 16)]
    #[case("XYX", 4)]
    #[case("YXY", 17)]
    #[case("YYY", 21)]
    fn table_2d_to_3d_places_leftmost_letter_lowest(#[case] name: &str, #[case] expected: u8) {
        let table = generate_table(DimensionPair::new(Dimension::Two, Dimension::Three));
        assert_eq!(table.get(name), Some(PackedMask::new(expected)));
        assert_eq!(table.name_of(PackedMask::new(expected)), Some(name));
    }

    #[test]
    fn tables_have_unique_values_and_expected_sizes() {
        let tables = MaskTables::generate();
        for (table, pair) in tables.iter().zip(DimensionPair::all()) {
            assert_eq!(table.pair(), pair);
            assert_eq!(table.len(), pair.table_len());

            let values: HashSet<_> = table.iter().map(|entry| entry.mask).collect();
            assert_eq!(values.len(), table.len(), "duplicate value in {pair}");
        }
    }

    #[test]
    fn entries_agree_with_codec() {
        for table in MaskTables::generate().iter() {
            let pair = table.pair();
            for entry in table {
                assert_eq!(parse_name(&entry.name, pair), Ok(entry.mask));
                assert_eq!(entry.mask.name(pair.target), entry.name);
                assert!(entry.mask.is_canonical(pair.target));
                assert!(entry.mask.check_selectors(pair.source, pair.target).is_ok());
            }
        }
    }

    #[test]
    fn lookup_uses_matching_table() {
        let tables = tables();
        assert_eq!(
            tables.lookup(Dimension::Four, Dimension::Four, "WZYX"),
            Some(PackedMask::encode([Axis::W, Axis::Z, Axis::Y, Axis::X]))
        );
        assert_eq!(tables.lookup(Dimension::Three, Dimension::Two, "XW"), None);
        assert_eq!(tables.lookup(Dimension::Three, Dimension::Two, "XYZ"), None);
    }

    #[test]
    fn name_of_rejects_non_canonical_masks() {
        let table = tables().get(DimensionPair::new(Dimension::Two, Dimension::Two));
        assert_eq!(table.name_of(PackedMask::new(0b0101_0000)), None);
    }

    #[rstest]
    #[case("xyx", Ok(PackedMask::new(4)))]
    #[case("XY", Err(SwizzleError::NameLengthMismatch { expected: 3, actual: 2 }))]
    #[case("XQX", Err(SwizzleError::InvalidAxisLabel('Q')))]
    #[case(
        "XYZ",
        Err(SwizzleError::SelectorOutOfRange { slot: 2, axis: Axis::Z, dimension: Dimension::Two })
    )]
    fn parse_name_handles_edge_cases(
        #[case] name: &str,
        #[case] expected: Result<PackedMask, SwizzleError>,
    ) {
        let pair = DimensionPair::new(Dimension::Two, Dimension::Three);
        assert_eq!(parse_name(name, pair), expected);
    }
}
