//! Grid path planning.
//!
//! This module provides the search fallback used when no straight route is
//! clear:
//!
//! - **A* Search**: shortest 8-connected path over an obstacle-inflated grid
//! - **Route Smoothing**: line-of-sight shortcuts over the grid route
//!
//! ## A* Pathfinding
//!
//! ```rust
//! use marga::core::{Obstacle, Point2D};
//! use marga::pathfinding::{GridConfig, plan_on_grid};
//!
//! let obstacles = [Obstacle::new(200.0, 200.0)];
//! let path = plan_on_grid(
//!     Point2D::new(100.0, 200.0),
//!     Point2D::new(300.0, 200.0),
//!     &obstacles,
//!     20.0,
//!     &GridConfig::default(),
//! )
//! .unwrap();
//! println!("{} waypoints, cost {:.1}", path.route.len(), path.cost);
//! ```
//!
//! ## Route Smoothing
//!
//! ```rust,ignore
//! use marga::pathfinding::RouteSmoother;
//! use marga::query::ProximityChecker;
//!
//! let smoother = RouteSmoother::with_defaults(ProximityChecker::new(&obstacles, 20.0));
//! let smooth = smoother.smooth_route(&path.route);
//! ```

pub mod astar;
pub mod smoothing;

pub use astar::{
    AStarPlanner, GridConfig, GridPath, MAX_GRID_CELLS, ObstacleGrid, find_path, path_exists,
    plan_on_grid,
};

pub use smoothing::{RouteSmoother, SmoothingConfig};
