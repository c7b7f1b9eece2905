//! Planned routes.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Consecutive points closer than this are considered duplicates.
const DUPLICATE_EPSILON: f32 = 1e-4;

/// An ordered sequence of waypoints joined by straight segments.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints, first = start, last = end.
    pub points: Vec<Point2D>,
    /// Total route length in plane units.
    pub length: f32,
}

impl Route {
    /// Create a route from waypoints, computing its length.
    pub fn new(points: Vec<Point2D>) -> Self {
        let length = path_length(&points);
        Self { points, length }
    }

    /// A route consisting of a single point.
    pub fn single(point: Point2D) -> Self {
        Self {
            points: vec![point],
            length: 0.0,
        }
    }

    /// Create a route, dropping consecutive duplicate waypoints.
    pub fn deduplicated(points: impl IntoIterator<Item = Point2D>) -> Self {
        let mut kept: Vec<Point2D> = Vec::new();
        for p in points {
            push_distinct(&mut kept, p);
        }
        Self::new(kept)
    }

    /// Check if the route has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// First waypoint.
    pub fn start(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    /// Last waypoint.
    pub fn end(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    /// Iterate over the connecting segments as (from, to) pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Route length converted to display units.
    pub fn length_in(&self, units_per_display_unit: f32) -> f32 {
        if units_per_display_unit <= 0.0 {
            return self.length;
        }
        self.length / units_per_display_unit
    }
}

/// Total length of a polyline.
pub fn path_length(points: &[Point2D]) -> f32 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Append `point` unless it repeats the current last point.
pub(crate) fn push_distinct(points: &mut Vec<Point2D>, point: Point2D) {
    match points.last() {
        Some(last) if last.distance_squared(&point) < DUPLICATE_EPSILON * DUPLICATE_EPSILON => {}
        _ => points.push(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_length() {
        let route = Route::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(3.0, 10.0),
        ]);
        assert!((route.length - 11.0).abs() < 1e-5);
        assert_eq!(route.segments().count(), 2);
        assert_eq!(route.start(), Some(Point2D::new(0.0, 0.0)));
        assert_eq!(route.end(), Some(Point2D::new(3.0, 10.0)));
    }

    #[test]
    fn test_single_point_route() {
        let route = Route::single(Point2D::new(10.0, 10.0));
        assert_eq!(route.len(), 1);
        assert_eq!(route.length, 0.0);
        assert_eq!(route.segments().count(), 0);
    }

    #[test]
    fn test_deduplicated() {
        let p = Point2D::new(1.0, 1.0);
        let q = Point2D::new(2.0, 1.0);
        let route = Route::deduplicated([p, p, q, q, p]);
        assert_eq!(route.points, vec![p, q, p]);
    }

    #[test]
    fn test_length_in_display_units() {
        let route = Route::new(vec![Point2D::ZERO, Point2D::new(250.0, 0.0)]);
        assert!((route.length_in(10.0) - 25.0).abs() < 1e-5);
        assert_eq!(route.length_in(0.0), route.length);
    }

    #[test]
    fn test_empty_route() {
        let route = Route::default();
        assert!(route.is_empty());
        assert_eq!(route.start(), None);
        assert_eq!(path_length(&route.points), 0.0);
    }
}
