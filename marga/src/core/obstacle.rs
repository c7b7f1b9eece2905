//! Circular obstacles.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// A circular obstacle.
///
/// Only the center is stored. The radius a route must keep clear of is shared
/// by every obstacle in a planning request and is passed alongside the slice.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Obstacle {
    /// Obstacle center
    pub center: Point2D,
}

impl Obstacle {
    /// Create an obstacle centered at (x, y)
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            center: Point2D::new(x, y),
        }
    }

    /// Distance from a point to the obstacle center
    #[inline]
    pub fn distance_to(&self, point: &Point2D) -> f32 {
        self.center.distance(point)
    }

    /// Is `point` closer than `clearance` to this obstacle?
    #[inline]
    pub fn intrudes(&self, point: &Point2D, clearance: f32) -> bool {
        self.center.distance_squared(point) < clearance * clearance
    }
}

impl From<Point2D> for Obstacle {
    fn from(center: Point2D) -> Self {
        Self { center }
    }
}
