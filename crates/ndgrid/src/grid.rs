//! The base container: dense fixed-rank storage with row-major strides.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use crate::error::GridError;
use crate::shape::{checked_offset, offset_of, row_major_strides, Indices};
use crate::storage::Storage;

/// A dense N-dimensional array over a contiguous buffer.
///
/// `dims` holds one extent per axis in major-to-minor order and `strides`
/// the matching row-major strides; both are recomputed together whenever the
/// shape changes, so they can never disagree. The buffer length always
/// equals the product of the extents.
///
/// A grid either owns its buffer or borrows one from the caller (see
/// [`Storage`]). Borrowed grids write through to the caller's memory;
/// cloning any grid produces an owned deep copy.
#[derive(Debug)]
pub struct Grid<'a, T, const N: usize> {
    data: Storage<'a, T>,
    dims: [usize; N],
    strides: [usize; N],
}

impl<'a, T, const N: usize> Grid<'a, T, N> {
    pub(crate) fn with_storage(data: Storage<'a, T>, dims: [usize; N]) -> Self {
        let strides = row_major_strides(&dims);
        Self {
            data,
            dims,
            strides,
        }
    }

    /// An empty grid: no buffer, every extent zero.
    pub fn new() -> Self {
        Self::with_storage(Storage::default(), [0; N])
    }

    /// Build a grid that owns `data`, laid out row-major over `shape`.
    ///
    /// Fails with [`GridError::SizeMismatch`] when the value count does not
    /// equal the product of the extents, in either direction.
    pub fn from_shape_vec<I: Indices<N>>(shape: I, data: Vec<T>) -> Result<Self, GridError> {
        let dims = shape.into_array();
        let expected = dims.iter().product::<usize>();
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::with_storage(Storage::Owned(data), dims))
    }

    /// Build a grid over a caller-owned buffer, without allocating.
    ///
    /// The grid never frees `data`; the borrow keeps it alive for as long as
    /// the grid exists, and writes go straight through to it. Fails with
    /// [`GridError::SizeMismatch`] when the slice length does not equal the
    /// product of the extents.
    pub fn from_slice_mut<I: Indices<N>>(shape: I, data: &'a mut [T]) -> Result<Self, GridError> {
        let dims = shape.into_array();
        let expected = dims.iter().product::<usize>();
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::with_storage(Storage::Borrowed(data), dims))
    }

    /// Element count: the product of all extents.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        N
    }

    /// Extent along one axis. Panics if `axis >= N`.
    pub fn extent(&self, axis: usize) -> usize {
        self.dims[axis]
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape(&self) -> [usize; N] {
        self.dims
    }

    pub fn strides(&self) -> [usize; N] {
        self.strides
    }

    /// True when the grid owns its buffer rather than borrowing it.
    pub fn is_owned(&self) -> bool {
        self.data.is_owned()
    }

    /// Element at `index`, or `None` if any coordinate is out of range.
    pub fn get<I: Indices<N>>(&self, index: I) -> Option<&T> {
        let coords = index.into_array();
        let offset = checked_offset(&coords, &self.dims, &self.strides)?;
        self.data.as_slice().get(offset)
    }

    pub fn get_mut<I: Indices<N>>(&mut self, index: I) -> Option<&mut T> {
        let coords = index.into_array();
        let offset = checked_offset(&coords, &self.dims, &self.strides)?;
        self.data.as_mut_slice().get_mut(offset)
    }

    /// Element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be within its axis extent.
    pub unsafe fn get_unchecked<I: Indices<N>>(&self, index: I) -> &T {
        let offset = offset_of(&index.into_array(), &self.strides);
        self.data.as_slice().get_unchecked(offset)
    }

    /// Mutable element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be within its axis extent.
    pub unsafe fn get_unchecked_mut<I: Indices<N>>(&mut self, index: I) -> &mut T {
        let offset = offset_of(&index.into_array(), &self.strides);
        self.data.as_mut_slice().get_unchecked_mut(offset)
    }

    /// Element at a flat buffer position, bypassing stride arithmetic.
    /// Panics if `index >= size()`.
    pub fn flat(&self, index: usize) -> &T {
        &self.data.as_slice()[index]
    }

    pub fn flat_mut(&mut self, index: usize) -> &mut T {
        &mut self.data.as_mut_slice()[index]
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.as_mut_slice().iter_mut()
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.as_mut_slice().fill(value);
    }

    /// Release any previous buffer and allocate fresh default-initialized
    /// owned storage for `shape`. Old contents are not preserved, and a
    /// borrowed grid becomes owning.
    pub fn allocate<I: Indices<N>>(&mut self, shape: I)
    where
        T: Default + Clone,
    {
        let dims = shape.into_array();
        let size = dims.iter().product::<usize>();
        log::trace!("allocating {} elements for shape {:?}", size, dims);
        self.data = Storage::Owned(vec![T::default(); size]);
        self.dims = dims;
        self.strides = row_major_strides(&dims);
    }

    /// Reinterpret the buffer under a new shape of equal element count.
    ///
    /// Only `dims` and `strides` change; buffer contents and flat element
    /// order are untouched. Fails with [`GridError::ShapeMismatch`] (leaving
    /// the grid unchanged) when the counts differ.
    pub fn reshape<I: Indices<N>>(&mut self, shape: I) -> Result<(), GridError> {
        let dims = shape.into_array();
        let requested = dims.iter().product::<usize>();
        if requested != self.size() {
            return Err(GridError::ShapeMismatch {
                size: self.size(),
                requested,
            });
        }
        log::trace!("reshaping {:?} to {:?}", self.dims, dims);
        self.dims = dims;
        self.strides = row_major_strides(&dims);
        Ok(())
    }

    /// Move the grid out, leaving `self` empty (zero size, no buffer).
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Convert into a grid that owns its buffer, copying only if borrowed.
    pub fn into_owned(self) -> Grid<'static, T, N>
    where
        T: Clone,
    {
        let data = match self.data {
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data.to_vec(),
        };
        Grid::with_storage(Storage::Owned(data), self.dims)
    }

    /// Positional comparison against a flat value sequence; false whenever
    /// the lengths differ.
    pub fn eq_flat(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.size() == values.len() && self.as_slice() == values
    }

    /// Apply `f` to every element, producing a same-shaped owned grid.
    pub fn mapv<U, F>(&self, mut f: F) -> Grid<'static, U, N>
    where
        F: FnMut(&T) -> U,
    {
        Grid::with_storage(Storage::Owned(self.iter().map(|v| f(v)).collect()), self.dims)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<'a, T, const N: usize> Grid<'a, T, N>
where
    T: Default + Clone,
{
    /// Allocate a grid for `shape`, every element `T::default()`.
    pub fn from_shape<I: Indices<N>>(shape: I) -> Self {
        let dims = shape.into_array();
        let size = dims.iter().product::<usize>();
        Self::with_storage(Storage::Owned(vec![T::default(); size]), dims)
    }
}

impl<'a, T, const N: usize> Grid<'a, T, N>
where
    T: Clone,
{
    /// Allocate a grid for `shape` and set every element to `value`.
    pub fn from_elem<I: Indices<N>>(shape: I, value: T) -> Self {
        let dims = shape.into_array();
        let size = dims.iter().product::<usize>();
        Self::with_storage(Storage::Owned(vec![value; size]), dims)
    }
}

impl<'a, T, const N: usize> Grid<'a, T, N>
where
    T: Clone + Zero,
{
    pub fn zeros<I: Indices<N>>(shape: I) -> Self {
        Self::from_elem(shape, T::zero())
    }
}

impl<'a, T, const N: usize> Grid<'a, T, N>
where
    T: Clone + One,
{
    pub fn ones<I: Indices<N>>(shape: I) -> Self {
        Self::from_elem(shape, T::one())
    }
}

impl<'a, T, const N: usize> Default for Grid<'a, T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Clone, const N: usize> Clone for Grid<'a, T, N> {
    /// Deep copy into freshly allocated owned storage, even when `self`
    /// borrows its buffer. A copy never aliases the source.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            dims: self.dims,
            strides: self.strides,
        }
    }
}

impl<'a, T, const N: usize, I: Indices<N>> Index<I> for Grid<'a, T, N> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        let coords = index.into_array();
        match checked_offset(&coords, &self.dims, &self.strides) {
            Some(offset) => &self.data.as_slice()[offset],
            None => panic!(
                "index {:?} out of bounds for shape {:?}",
                coords, self.dims
            ),
        }
    }
}

impl<'a, T, const N: usize, I: Indices<N>> IndexMut<I> for Grid<'a, T, N> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        let coords = index.into_array();
        match checked_offset(&coords, &self.dims, &self.strides) {
            Some(offset) => &mut self.data.as_mut_slice()[offset],
            None => panic!(
                "index {:?} out of bounds for shape {:?}",
                coords, self.dims
            ),
        }
    }
}

impl<'a, 'b, T: PartialEq, const N: usize> PartialEq<Grid<'b, T, N>> for Grid<'a, T, N> {
    /// Equivalent only with identical extents and identical elements at
    /// every position; strides follow from extents.
    fn eq(&self, other: &Grid<'b, T, N>) -> bool {
        self.dims == other.dims && self.as_slice() == other.as_slice()
    }
}

impl<'a, T: fmt::Display, const N: usize> fmt::Display for Grid<'a, T, N> {
    /// Human-readable dump: rank, size and shape, then each row along the
    /// last axis, descending axis by axis. A debugging aid, not a stable
    /// format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rank {} array, size {}, shape (", N, self.size())?;
        for (axis, extent) in self.dims.iter().enumerate() {
            if axis > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}", extent)?;
        }
        writeln!(f, ")")?;
        if self.is_empty() {
            return Ok(());
        }
        fmt_block(f, self.as_slice(), &self.dims, 0)
    }
}

fn fmt_block<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    dims: &[usize],
    depth: usize,
) -> fmt::Result {
    match dims.len() {
        0 => writeln!(f, "{}", data[0]),
        1 => {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            write!(f, "[")?;
            for (i, value) in data.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, "]")
        }
        _ => {
            let block = dims[1..].iter().product::<usize>();
            for chunk in data.chunks(block) {
                fmt_block(f, chunk, &dims[1..], depth + 1)?;
            }
            Ok(())
        }
    }
}
