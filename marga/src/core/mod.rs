//! Core types for the Marga planner.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`Point2D`]: Floating-point plane coordinates
//! - [`GridCoord`]: Integer cell indices used by the grid pathfinder
//!
//! ### Obstacles
//! - [`Obstacle`]: Circle center; the clearance radius is shared per request
//!
//! ### Geometry
//! - [`distance`], [`distance_to_segment`], [`distance_to_line`]

mod geometry;
mod obstacle;
mod point;

pub use geometry::{distance, distance_to_line, distance_to_segment};
pub use obstacle::Obstacle;
pub use point::{GridCoord, Point2D};
