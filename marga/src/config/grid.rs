//! Grid search configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::GridConfig;

use super::defaults;

/// Grid search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell side length
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Side length of the square planning area
    #[serde(default = "defaults::grid_extent")]
    pub extent: f32,

    /// Buffer added to the clearance radius when blocking cells
    #[serde(default = "defaults::inflation_margin")]
    pub inflation_margin: f32,

    /// Maximum cells to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            cell_size: defaults::cell_size(),
            extent: defaults::grid_extent(),
            inflation_margin: defaults::inflation_margin(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            cell_size: self.cell_size,
            grid_extent: self.extent,
            inflation_margin: self.inflation_margin,
            max_iterations: self.max_iterations,
        }
    }
}
