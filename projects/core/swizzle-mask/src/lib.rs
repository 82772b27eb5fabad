#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod axis;
pub mod builder;
pub mod dimension;
pub mod error;
pub mod gather;
pub mod mask;
pub mod pair_mask;
pub mod table;

pub use axis::Axis;
pub use builder::{Mask2D, Mask3D, Mask4D};
pub use dimension::{Dimension, DimensionPair};
pub use error::SwizzleError;
pub use gather::{gather, swizzle, to_2d, to_3d, to_4d, try_gather, Components, FromComponents};
pub use mask::PackedMask;
pub use pair_mask::PairMask;
#[cfg(feature = "std")]
pub use table::tables;
pub use table::{generate_table, parse_name, MaskTables, NamedMask, NamedMaskTable};
