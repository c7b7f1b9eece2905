//! A* pathfinding types.

use crate::core::GridCoord;
use crate::error::{Result, require_positive, require_within};
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Most cells a single obstacle grid may hold.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// A node in the search arena
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    pub g_cost: f32, // Cost from start, plane units
    pub parent: Option<usize>,
}

/// Frontier entry pointing into the node arena
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierEntry {
    pub f_cost: f32,
    pub h_cost: f32,
    pub seq: u64,
    pub node: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest f, then lowest h,
        // then earliest pushed
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.h_cost.total_cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grid search configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell side length in plane units
    pub cell_size: f32,
    /// Side length of the square search area `[0, extent)²`
    pub grid_extent: f32,
    /// Extra buffer added to the clearance radius when blocking cells
    pub inflation_margin: f32,
    /// Maximum number of cells to expand before giving up
    pub max_iterations: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 5.0,
            grid_extent: 800.0,
            inflation_margin: 6.0,
            max_iterations: 1_000_000,
        }
    }
}

impl GridConfig {
    /// Default configuration with custom cell size and extent
    pub fn with_grid(cell_size: f32, grid_extent: f32) -> Self {
        Self {
            cell_size,
            grid_extent,
            ..Default::default()
        }
    }

    /// Set the inflation margin
    pub fn with_inflation_margin(mut self, margin: f32) -> Self {
        self.inflation_margin = margin;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Cells per grid side, `ceil(extent / cell_size)`.
    ///
    /// Grids with more than [`MAX_GRID_CELLS`] cells are rejected.
    pub fn cells_per_side(&self) -> Result<i32> {
        require_positive("cell_size", self.cell_size)?;
        require_positive("grid_extent", self.grid_extent)?;
        let side = (self.grid_extent as f64 / self.cell_size as f64).ceil();
        require_within("grid cells", side * side, MAX_GRID_CELLS)?;
        Ok(side as i32)
    }

    /// Smallest margin for which straight moves between unblocked cell
    /// centers can never cut inside the clearance radius.
    pub fn safe_inflation_margin(&self) -> f32 {
        self.cell_size * std::f32::consts::FRAC_1_SQRT_2
    }
}

/// Result of a successful grid search
#[derive(Clone, Debug)]
pub struct GridPath {
    /// Path as cell coordinates, start cell first
    pub cells: Vec<GridCoord>,
    /// Path through the cell centers
    pub route: Route,
    /// Total path cost in plane units
    pub cost: f32,
    /// Number of cells expanded during search
    pub nodes_expanded: usize,
}

impl GridPath {
    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.cells.len()
    }
}
