//! Per-dimension mask builders.
//!
//! Each builder is an immutable tuple of [`Axis`] selectors, one per target component,
//! with a single conversion into the packed form.

use crate::axis::Axis;
use crate::mask::PackedMask;

/// Selectors for a 2 component target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask2D {
    /// Source of the first target component
    pub x: Axis,
    /// Source of the second target component
    pub y: Axis,
}

/// Selectors for a 3 component target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask3D {
    /// Source of the first target component
    pub x: Axis,
    /// Source of the second target component
    pub y: Axis,
    /// Source of the third target component
    pub z: Axis,
}

/// Selectors for a 4 component target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask4D {
    /// Source of the first target component
    pub x: Axis,
    /// Source of the second target component
    pub y: Axis,
    /// Source of the third target component
    pub z: Axis,
    /// Source of the fourth target component
    pub w: Axis,
}

impl Mask2D {
    /// Creates a new builder.
    pub const fn new(x: Axis, y: Axis) -> Self {
        Self { x, y }
    }

    /// Packs the selectors: `x | y << 2`.
    pub const fn to_mask(self) -> PackedMask {
        PackedMask::new(self.x.to_bits() | (self.y.to_bits() << 2))
    }
}

impl Mask3D {
    /// Creates a new builder.
    pub const fn new(x: Axis, y: Axis, z: Axis) -> Self {
        Self { x, y, z }
    }

    /// Packs the selectors: `x | y << 2 | z << 4`.
    pub const fn to_mask(self) -> PackedMask {
        PackedMask::new(self.x.to_bits() | (self.y.to_bits() << 2) | (self.z.to_bits() << 4))
    }
}

impl Mask4D {
    /// Creates a new builder.
    pub const fn new(x: Axis, y: Axis, z: Axis, w: Axis) -> Self {
        Self { x, y, z, w }
    }

    /// Packs the selectors: `x | y << 2 | z << 4 | w << 6`.
    pub const fn to_mask(self) -> PackedMask {
        PackedMask::new(
            self.x.to_bits()
                | (self.y.to_bits() << 2)
                | (self.z.to_bits() << 4)
                | (self.w.to_bits() << 6),
        )
    }
}

impl From<Mask2D> for PackedMask {
    fn from(builder: Mask2D) -> Self {
        builder.to_mask()
    }
}

impl From<Mask3D> for PackedMask {
    fn from(builder: Mask3D) -> Self {
        builder.to_mask()
    }
}

impl From<Mask4D> for PackedMask {
    fn from(builder: Mask4D) -> Self {
        builder.to_mask()
    }
}

impl From<PackedMask> for Mask2D {
    fn from(mask: PackedMask) -> Self {
        let (x, y) = mask.decode2();
        Self { x, y }
    }
}

impl From<PackedMask> for Mask3D {
    fn from(mask: PackedMask) -> Self {
        let (x, y, z) = mask.decode3();
        Self { x, y, z }
    }
}

impl From<PackedMask> for Mask4D {
    fn from(mask: PackedMask) -> Self {
        let (x, y, z, w) = mask.decode4();
        Self { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Mask2D::new(Axis::X, Axis::X), 0)]
    #[case(Mask2D::new(Axis::Y, Axis::X), 1)]
    #[case(Mask2D::new(Axis::X, Axis::Y), 4)]
    #[case(Mask2D::new(Axis::Y, Axis::Y), 5)]
    fn mask2d_packs_like_reference_values(#[case] builder: Mask2D, #[case] expected: u8) {
        assert_eq!(builder.to_mask().raw(), expected);
        assert_eq!(Mask2D::from(builder.to_mask()), builder);
    }

    #[test]
    fn builders_agree_with_encode() {
        let all = Axis::all_values();
        for x in all {
            for y in all {
                assert_eq!(Mask2D::new(*x, *y).to_mask(), PackedMask::encode([*x, *y]));
                for z in all {
                    assert_eq!(
                        Mask3D::new(*x, *y, *z).to_mask(),
                        PackedMask::encode([*x, *y, *z])
                    );
                    for w in all {
                        let builder = Mask4D::new(*x, *y, *z, *w);
                        assert_eq!(builder.to_mask(), PackedMask::encode([*x, *y, *z, *w]));
                        assert_eq!(Mask4D::from(PackedMask::from(builder)), builder);
                    }
                }
            }
        }
    }

    #[test]
    fn mask3d_places_last_selector_highest() {
        let mask = Mask3D::new(Axis::Z, Axis::X, Axis::Z).to_mask();
        assert_eq!(mask.raw(), 34);
        assert_eq!(Mask3D::from(mask), Mask3D::new(Axis::Z, Axis::X, Axis::Z));
    }
}
