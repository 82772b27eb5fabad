//! Emits the named mask tables as Rust source.
//!
//! The output declares one module per dimension pair (`d2_d3`, `d4_d4`, ...) holding a
//! [`PairMask`] constant per entry, so a build step can cache the tables as plain
//! constants instead of generating them at run time:
//!
//! ```text
//! pub mod d2_d2 {
//!     use swizzle_mask::PairMask;
//!
//!     pub const XX: PairMask<2, 2> = PairMask::from_raw(0x00);
//!     pub const XY: PairMask<2, 2> = PairMask::from_raw(0x04);
//!     ...
//! }
//! ```
//!
//! [`PairMask`]: crate::PairMask

use super::{MaskTables, NamedMaskTable};
use alloc::vec::Vec;
use core::fmt;

/// Crate path used in emitted `use` statements unless overridden.
pub const DEFAULT_CRATE_PATH: &str = "swizzle_mask";

/// Rust source for one or more tables. Rendered through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct RustSource<'a> {
    tables: Vec<&'a NamedMaskTable>,
    crate_path: &'a str,
    header: bool,
}

impl<'a> RustSource<'a> {
    /// Source for all 9 tables, with a file header.
    pub fn all(tables: &'a MaskTables) -> Self {
        Self {
            tables: tables.iter().collect(),
            crate_path: DEFAULT_CRATE_PATH,
            header: true,
        }
    }

    /// Source for a single table, without a file header.
    pub fn single(table: &'a NamedMaskTable) -> Self {
        Self {
            tables: alloc::vec![table],
            crate_path: DEFAULT_CRATE_PATH,
            header: false,
        }
    }

    /// Path the emitted code imports [`PairMask`] from, e.g. `crate` when the output is
    /// included inside this crate.
    ///
    /// [`PairMask`]: crate::PairMask
    pub fn with_crate_path(mut self, crate_path: &'a str) -> Self {
        self.crate_path = crate_path;
        self
    }

    /// Whether to prepend the generated-file header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>, table: &NamedMaskTable) -> fmt::Result {
        let pair = table.pair();
        writeln!(
            f,
            "/// Masks swizzling a {} component vector into a {} component vector.",
            pair.source, pair.target
        )?;
        writeln!(f, "pub mod {} {{", pair.module_name())?;
        writeln!(f, "    use {}::PairMask;", self.crate_path)?;
        writeln!(f)?;
        for entry in table {
            writeln!(
                f,
                "    pub const {}: PairMask<{}, {}> = PairMask::from_raw(0x{:02X});",
                entry.name,
                pair.source,
                pair.target,
                entry.mask.raw()
            )?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for RustSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            writeln!(f, "// Generated by `swizzle-mask generate`. Do not edit.")?;
            writeln!(f)?;
        }

        for (index, table) in self.tables.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            self.write_table(f, table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dimension, DimensionPair};
    use crate::table::generate_table;

    #[test]
    fn emits_single_table() {
        let table = generate_table(DimensionPair::new(Dimension::Two, Dimension::Two));
        let source = RustSource::single(&table).to_string();
        let expected = "\
/// Masks swizzling a 2 component vector into a 2 component vector.
pub mod d2_d2 {
    use swizzle_mask::PairMask;

    pub const XX: PairMask<2, 2> = PairMask::from_raw(0x00);
    pub const XY: PairMask<2, 2> = PairMask::from_raw(0x04);
    pub const YX: PairMask<2, 2> = PairMask::from_raw(0x01);
    pub const YY: PairMask<2, 2> = PairMask::from_raw(0x05);
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn emits_all_tables_with_header() {
        let tables = MaskTables::generate();
        let source = RustSource::all(&tables).with_crate_path("crate").to_string();

        assert!(source.starts_with("// Generated by `swizzle-mask generate`."));
        assert!(source.contains("    use crate::PairMask;\n"));
        for pair in DimensionPair::all() {
            assert!(source.contains(&format!("pub mod {} {{", pair.module_name())));
        }

        let constants = source
            .lines()
            .filter(|line| line.trim_start().starts_with("pub const "))
            .count();
        assert_eq!(constants, 4 + 8 + 16 + 9 + 27 + 81 + 16 + 64 + 256);
        assert!(source.contains("pub const WZYX: PairMask<4, 4> = PairMask::from_raw(0x1B);"));
    }

    #[test]
    fn header_can_be_disabled() {
        let tables = MaskTables::generate();
        let source = RustSource::all(&tables).with_header(false).to_string();
        assert!(source.starts_with("/// Masks swizzling a 2 component"));
    }
}
