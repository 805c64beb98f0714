//! ndgrid: fixed-rank contiguous multidimensional array containers.
//!
//! This crate provides `Grid`, a dense N-dimensional array with row-major
//! strided indexing. The rank is a compile-time parameter; storage is either
//! an owned buffer or a mutable borrow of externally owned memory. Rank
//! aliases (`Grid1` through `Grid4`) and scalar-tuple shape/index arguments
//! give a natural call surface for the common low ranks.
//!
//! The design favors a small, predictable core: strides are computed once at
//! construction and only recomputed on explicit reshape or reallocation, and
//! the two recoverable failures (size mismatch on construction, shape
//! mismatch on reshape) are reported as `GridError`.
pub mod error;
pub mod grid;
pub mod ranked;
pub mod shape;
pub mod storage;

pub use error::GridError;
pub use grid::Grid;
pub use ranked::{Grid1, Grid2, Grid3, Grid4, OwnedGrid};
pub use shape::Indices;
pub use storage::Storage;
