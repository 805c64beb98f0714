//! Rank aliases and the low-rank convenience surface.
//!
//! A single generic `Grid` covers every rank; the aliases below plus the
//! scalar-tuple [`Indices`](crate::shape::Indices) impls give ranks 1–4 the
//! natural multi-argument call surface, with everything forwarding to the
//! rank-generic base operations.

use crate::grid::Grid;
use crate::storage::Storage;

/// A grid that owns its buffer.
pub type OwnedGrid<T, const N: usize> = Grid<'static, T, N>;

pub type Grid1<'a, T> = Grid<'a, T, 1>;
pub type Grid2<'a, T> = Grid<'a, T, 2>;
pub type Grid3<'a, T> = Grid<'a, T, 3>;
pub type Grid4<'a, T> = Grid<'a, T, 4>;

impl<'a, T> Grid<'a, T, 1> {
    pub fn len(&self) -> usize {
        self.size()
    }
}

impl<'a, T> Grid<'a, T, 2> {
    pub fn nrows(&self) -> usize {
        self.extent(0)
    }

    pub fn ncols(&self) -> usize {
        self.extent(1)
    }

    /// One contiguous row along the last axis, as a plain slice.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.nrows(), "row index out of bounds");
        let start = row * self.ncols();
        &self.as_slice()[start..start + self.ncols()]
    }
}

impl<T> From<Vec<T>> for Grid<'static, T, 1> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Grid::with_storage(Storage::Owned(values), [len])
    }
}

impl<T> FromIterator<T> for Grid<'static, T, 1> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}
