//! Argument parsing helpers for shapes, value lists, and coordinates.

use anyhow::{Context, Result};

/// Parse a shape like `3x2` or `2x3x4` into per-axis extents.
pub fn parse_shape(text: &str) -> Result<Vec<usize>> {
    text.split('x')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid extent '{}' in shape '{}'", part, text))
        })
        .collect()
}

/// Parse a comma-separated list of values like `1.1,2.2,3.3`.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid value '{}' in list '{}'", part, text))
        })
        .collect()
}

/// Parse a comma-separated coordinate like `1,1`.
pub fn parse_coords(text: &str) -> Result<Vec<usize>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid coordinate '{}' in '{}'", part, text))
        })
        .collect()
}
