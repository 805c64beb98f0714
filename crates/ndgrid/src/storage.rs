//! Backing storage for grids: an owned buffer or a borrowed slice.

/// The backing buffer of a grid.
///
/// `Owned` holds its own allocation and releases it when dropped; `Borrowed`
/// wraps memory the caller supplies and keeps alive, and never frees it.
/// The lifetime bound makes it impossible to use a borrowed buffer past its
/// source, and cloning always produces an `Owned` deep copy.
#[derive(Debug)]
pub enum Storage<'a, T> {
    Owned(Vec<T>),
    Borrowed(&'a mut [T]),
}

impl<'a, T> Storage<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Storage::Owned(data) => data.len(),
            Storage::Borrowed(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for the `Owned` variant: this storage frees its buffer on drop.
    pub fn is_owned(&self) -> bool {
        matches!(self, Storage::Owned(_))
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }
}

impl<'a, T: Clone> Clone for Storage<'a, T> {
    fn clone(&self) -> Self {
        Storage::Owned(self.as_slice().to_vec())
    }
}

impl<'a, T> Default for Storage<'a, T> {
    fn default() -> Self {
        Storage::Owned(Vec::new())
    }
}
