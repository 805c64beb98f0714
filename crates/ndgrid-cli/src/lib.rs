//! Library side of the ndgrid demo driver.
//!
//! Holds the JSON grid config and the argument parsing helpers so the
//! integration tests can exercise them without going through the binary.
pub mod config;
pub mod util;
