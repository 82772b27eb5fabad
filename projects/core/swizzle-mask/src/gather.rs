//! Applying masks to vectors.
//!
//! The vector types themselves live in the host math library. This module only needs
//! indexed reads from the source ([`Components`]) and construction of the result
//! ([`FromComponents`]); both are implemented for arrays and homogeneous tuples.
//!
//! # Choosing a Function
//!
//! - [`swizzle`]: takes a [`PairMask`], which is already validated. Cannot fail.
//! - [`try_gather`]: takes a raw [`PackedMask`] and validates it against the source.
//! - [`gather`] / [`to_2d`] / [`to_3d`] / [`to_4d`]: take a raw [`PackedMask`] without
//!   validation. A selector past the end of the source is an index fault and panics.

use crate::dimension::Dimension;
use crate::error::SwizzleError;
use crate::mask::PackedMask;
use crate::pair_mask::PairMask;

/// Indexed read access to the `N` components of a vector.
pub trait Components<T, const N: usize> {
    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    fn component(&self, index: usize) -> T;
}

/// Construction of a vector from `M` components.
pub trait FromComponents<T, const M: usize>: Sized {
    /// Builds the vector, first component first.
    fn from_components(components: [T; M]) -> Self;
}

impl<T: Copy, const N: usize> Components<T, N> for [T; N] {
    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }
}

impl<T, const M: usize> FromComponents<T, M> for [T; M] {
    #[inline]
    fn from_components(components: [T; M]) -> Self {
        components
    }
}

impl<T: Copy> Components<T, 2> for (T, T) {
    #[inline]
    fn component(&self, index: usize) -> T {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("component index {index} out of range for a 2 component vector"),
        }
    }
}

impl<T: Copy> Components<T, 3> for (T, T, T) {
    #[inline]
    fn component(&self, index: usize) -> T {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("component index {index} out of range for a 3 component vector"),
        }
    }
}

impl<T: Copy> Components<T, 4> for (T, T, T, T) {
    #[inline]
    fn component(&self, index: usize) -> T {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            3 => self.3,
            _ => panic!("component index {index} out of range for a 4 component vector"),
        }
    }
}

impl<T> FromComponents<T, 2> for (T, T) {
    #[inline]
    fn from_components([x, y]: [T; 2]) -> Self {
        (x, y)
    }
}

impl<T> FromComponents<T, 3> for (T, T, T) {
    #[inline]
    fn from_components([x, y, z]: [T; 3]) -> Self {
        (x, y, z)
    }
}

impl<T> FromComponents<T, 4> for (T, T, T, T) {
    #[inline]
    fn from_components([x, y, z, w]: [T; 4]) -> Self {
        (x, y, z, w)
    }
}

/// Builds an `M` component vector where component `k` is
/// `source[mask.decode_one(k)]`.
///
/// The mask is not validated.
///
/// # Panics
///
/// If a selector in slots `0..M` is `>= N`. Use [`try_gather`] or [`swizzle`] to avoid this.
#[inline]
pub fn gather<T, S, D, const N: usize, const M: usize>(source: &S, mask: PackedMask) -> D
where
    S: Components<T, N>,
    D: FromComponents<T, M>,
{
    const { assert!(N >= 2 && N <= 4 && M >= 2 && M <= 4, "vectors have 2 to 4 components") };
    D::from_components(core::array::from_fn(|slot| {
        source.component(mask.decode_one(slot).index())
    }))
}

/// Like [`gather`], but checks every selector against the source dimension first.
///
/// # Errors
///
/// [`SwizzleError::SelectorOutOfRange`] if a selector in slots `0..M` is `>= N`.
/// Bits above the last target slot are ignored.
pub fn try_gather<T, S, D, const N: usize, const M: usize>(
    source: &S,
    mask: PackedMask,
) -> Result<D, SwizzleError>
where
    S: Components<T, N>,
    D: FromComponents<T, M>,
{
    let source_dimension = Dimension::try_from(N)?;
    let target_dimension = Dimension::try_from(M)?;
    mask.check_selectors(source_dimension, target_dimension)?;
    Ok(gather(source, mask))
}

/// Swizzles `source` with a mask validated for this exact dimension pair.
///
/// ```
/// use swizzle_mask::{gather::swizzle, PairMask};
///
/// const ZXZ: PairMask<3, 3> = PairMask::from_raw(34);
/// let result: [i32; 3] = swizzle(&[10, 20, 30], ZXZ);
/// assert_eq!(result, [30, 10, 30]);
/// ```
#[inline]
pub fn swizzle<T, S, D, const N: usize, const M: usize>(source: &S, mask: PairMask<N, M>) -> D
where
    S: Components<T, N>,
    D: FromComponents<T, M>,
{
    gather(source, mask.mask())
}

/// Swizzles `source` into a 2 component vector. See [`gather`].
#[inline]
pub fn to_2d<T, S, D, const N: usize>(source: &S, mask: PackedMask) -> D
where
    S: Components<T, N>,
    D: FromComponents<T, 2>,
{
    gather(source, mask)
}

/// Swizzles `source` into a 3 component vector. See [`gather`].
#[inline]
pub fn to_3d<T, S, D, const N: usize>(source: &S, mask: PackedMask) -> D
where
    S: Components<T, N>,
    D: FromComponents<T, 3>,
{
    gather(source, mask)
}

/// Swizzles `source` into a 4 component vector. See [`gather`].
#[inline]
pub fn to_4d<T, S, D, const N: usize>(source: &S, mask: PackedMask) -> D
where
    S: Components<T, N>,
    D: FromComponents<T, 4>,
{
    gather(source, mask)
}
