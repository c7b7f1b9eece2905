//! Obstacle-inflated occupancy grid over the planning plane.

use log::{trace, warn};

use crate::core::{GridCoord, Obstacle, Point2D};
use crate::error::{
    InvalidInput, Result, require_finite_obstacles, require_non_negative, require_positive,
};

use super::types::GridConfig;

/// Square grid over `[0, extent)²` with blocked cells precomputed.
///
/// A cell is blocked when its center lies within
/// `clearance + inflation_margin` of any obstacle.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    cell_size: f32,
    extent: f32,
    cells_per_side: i32,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Build the grid for one obstacle snapshot.
    pub fn build(obstacles: &[Obstacle], clearance: f32, config: &GridConfig) -> Result<Self> {
        require_positive("clearance", clearance)?;
        require_finite_obstacles(obstacles)?;
        require_positive("cell_size", config.cell_size)?;
        require_positive("grid_extent", config.grid_extent)?;
        require_non_negative("inflation_margin", config.inflation_margin)?;

        if config.inflation_margin < config.safe_inflation_margin() {
            warn!(
                "[AStar] inflation margin {:.2} is below half a cell diagonal ({:.2}); \
                 diagonal moves may cut inside the clearance radius",
                config.inflation_margin,
                config.safe_inflation_margin()
            );
        }

        let cells_per_side = config.cells_per_side()?;
        let mut grid = Self {
            cell_size: config.cell_size,
            extent: config.grid_extent,
            cells_per_side,
            blocked: vec![false; (cells_per_side as usize).pow(2)],
        };

        let radius = clearance + config.inflation_margin;
        for obstacle in obstacles {
            grid.block_disc(obstacle.center, radius);
        }

        trace!(
            "[AStar] grid {}x{} cells, {} blocked by {} obstacles",
            cells_per_side,
            cells_per_side,
            grid.blocked_count(),
            obstacles.len()
        );
        Ok(grid)
    }

    fn block_disc(&mut self, center: Point2D, radius: f32) {
        let lo = self.point_to_cell(Point2D::new(center.x - radius, center.y - radius));
        let hi = self.point_to_cell(Point2D::new(center.x + radius, center.y + radius));
        let max = self.cells_per_side - 1;
        let radius_sq = radius * radius;

        for y in lo.y.clamp(0, max)..=hi.y.clamp(0, max) {
            for x in lo.x.clamp(0, max)..=hi.x.clamp(0, max) {
                let coord = GridCoord::new(x, y);
                if self.cell_center(coord).distance_squared(&center) < radius_sq {
                    let idx = self.index(coord);
                    self.blocked[idx] = true;
                }
            }
        }
    }

    /// Cell side length
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Side length of the covered area
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Number of cells along each side
    pub fn cells_per_side(&self) -> i32 {
        self.cells_per_side
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Is the point inside `[0, extent)²`?
    pub fn contains_point(&self, point: Point2D) -> bool {
        inside_extent(point, self.extent)
    }

    /// Check if a cell index is inside the grid
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.cells_per_side && coord.y < self.cells_per_side
    }

    /// Is the cell blocked? Cells outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        !self.is_valid_coord(coord) || self.blocked[self.index(coord)]
    }

    /// Cell containing a point (unchecked; may lie outside the grid)
    #[inline]
    pub fn point_to_cell(&self, point: Point2D) -> GridCoord {
        GridCoord::new(
            (point.x / self.cell_size).floor() as i32,
            (point.y / self.cell_size).floor() as i32,
        )
    }

    /// Center of a cell in plane coordinates
    #[inline]
    pub fn cell_center(&self, coord: GridCoord) -> Point2D {
        Point2D::new(
            (coord.x as f32 + 0.5) * self.cell_size,
            (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Linear index of a valid cell
    #[inline]
    pub(super) fn index(&self, coord: GridCoord) -> usize {
        coord.y as usize * self.cells_per_side as usize + coord.x as usize
    }
}

fn inside_extent(point: Point2D, extent: f32) -> bool {
    point.x >= 0.0 && point.y >= 0.0 && point.x < extent && point.y < extent
}

/// Reject a point outside `[0, extent)²`.
pub(crate) fn require_inside(name: &'static str, point: Point2D, extent: f32) -> Result<()> {
    if inside_extent(point, extent) {
        Ok(())
    } else {
        Err(InvalidInput::OutOfBounds {
            name,
            point,
            extent,
        }
        .into())
    }
}
