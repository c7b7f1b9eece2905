//! A* pathfinding algorithm.
//!
//! Implements A* search on a uniform grid over the planning plane with:
//! - Obstacles inflated by the clearance radius plus a safety margin
//! - 8-connected movement, Euclidean step costs and heuristic
//! - Deterministic frontier ordering (f, then h, then insertion order)
//! - Arena-allocated search nodes linked by index

mod grid;
mod planner;
mod types;

pub use grid::ObstacleGrid;
pub(crate) use grid::require_inside;
pub use planner::AStarPlanner;
pub use types::{GridConfig, GridPath, MAX_GRID_CELLS};

use crate::core::{Obstacle, Point2D};
use crate::error::Result;
use crate::route::Route;

/// Grid search between two plane points with a full configuration.
///
/// Builds the obstacle grid for this snapshot and runs one search.
pub fn plan_on_grid(
    start: Point2D,
    end: Point2D,
    obstacles: &[Obstacle],
    clearance: f32,
    config: &GridConfig,
) -> Result<GridPath> {
    let grid = ObstacleGrid::build(obstacles, clearance, config)?;
    AStarPlanner::new(&grid, config.max_iterations).find_path_world(start, end)
}

/// Quick path finding with the default margin and iteration cap.
///
/// Waypoints are cell centers.
pub fn find_path(
    start: Point2D,
    end: Point2D,
    obstacles: &[Obstacle],
    clearance: f32,
    cell_size: f32,
    grid_extent: f32,
) -> Result<Route> {
    let config = GridConfig::with_grid(cell_size, grid_extent);
    plan_on_grid(start, end, obstacles, clearance, &config).map(|path| path.route)
}

/// Check if a path exists
pub fn path_exists(
    start: Point2D,
    end: Point2D,
    obstacles: &[Obstacle],
    clearance: f32,
    config: &GridConfig,
) -> bool {
    plan_on_grid(start, end, obstacles, clearance, config).is_ok()
}
