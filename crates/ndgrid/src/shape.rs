//! Rank-generic shape and stride arithmetic.
//!
//! Strides are row-major: the last axis is contiguous, and
//! `strides[i] == strides[i + 1] * dims[i + 1]` with a trailing unit stride.

/// A set of N axis values — dimension lengths or coordinates.
///
/// Implemented for `[usize; N]` at every rank, and for plain scalars and
/// scalar tuples at ranks 1 through 4, so shapes and indices can be written
/// as `(3, 2)` instead of `[3, 2]`.
pub trait Indices<const N: usize> {
    fn into_array(self) -> [usize; N];
}

impl<const N: usize> Indices<N> for [usize; N] {
    fn into_array(self) -> [usize; N] {
        self
    }
}

impl Indices<1> for usize {
    fn into_array(self) -> [usize; 1] {
        [self]
    }
}

impl Indices<1> for (usize,) {
    fn into_array(self) -> [usize; 1] {
        [self.0]
    }
}

impl Indices<2> for (usize, usize) {
    fn into_array(self) -> [usize; 2] {
        [self.0, self.1]
    }
}

impl Indices<3> for (usize, usize, usize) {
    fn into_array(self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

impl Indices<4> for (usize, usize, usize, usize) {
    fn into_array(self) -> [usize; 4] {
        [self.0, self.1, self.2, self.3]
    }
}

/// Row-major strides for the given dimension lengths.
pub fn row_major_strides<const N: usize>(dims: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    let mut strd = 1;
    for i in (0..N).rev() {
        strides[i] = strd;
        strd *= dims[i];
    }
    strides
}

/// Flat offset of a coordinate, without bounds checking.
///
/// The result is only meaningful when every coordinate is within its extent.
pub fn offset_of<const N: usize>(coords: &[usize; N], strides: &[usize; N]) -> usize {
    let mut offset = 0;
    for i in 0..N {
        offset += coords[i] * strides[i];
    }
    offset
}

/// Flat offset of a coordinate, or `None` if any axis is out of range.
pub fn checked_offset<const N: usize>(
    coords: &[usize; N],
    dims: &[usize; N],
    strides: &[usize; N],
) -> Option<usize> {
    let mut offset = 0;
    for ((&coord, &dim), &stride) in coords.iter().zip(dims.iter()).zip(strides.iter()) {
        if coord >= dim {
            return None;
        }
        offset += coord * stride;
    }
    Some(offset)
}
