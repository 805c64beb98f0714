//! JSON grid configs for the demo driver.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Declarative description of a demo grid: a shape plus either a fill value
/// or an explicit row-major value sequence. When both are present the value
/// sequence wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub shape: Vec<usize>,
    #[serde(default)]
    pub fill: Option<f64>,
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl Default for GridConfig {
    /// The built-in demo: a 3 x 2 grid initialised from a literal sequence.
    fn default() -> Self {
        GridConfig {
            shape: vec![3, 2],
            fill: None,
            values: Some(vec![1.1, 2.2, 3.3, 4.4, 5.5, 6.6]),
        }
    }
}

/// Load a [`GridConfig`] from a JSON file.
pub fn load_grid_config(path: &Path) -> Result<GridConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading grid config {:?}", path))?;
    let config = serde_json::from_str(&raw).with_context(|| format!("parsing grid config {:?}", path))?;
    Ok(config)
}
