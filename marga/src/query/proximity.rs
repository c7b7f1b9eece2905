//! Route-to-obstacle clearance queries.

use serde::{Deserialize, Serialize};

use crate::core::{Obstacle, Point2D, distance_to_line, distance_to_segment};

/// Clearance reported when there is nothing to measure against
/// (empty route or no obstacles).
pub const UNOBSTRUCTED: f32 = f32::MAX;

/// How segments between waypoints are measured against obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceMode {
    /// Distance to the finite segment (projection clamped to its ends).
    #[default]
    Segment,
    /// Distance to the infinite line through the segment's ends.
    ///
    /// Over-reports obstructions: an obstacle anywhere near the extended
    /// line counts, even far past the route's ends.
    InfiniteLine,
}

/// Smallest distance between any route point and any obstacle.
///
/// Stops at the first pair closer than `clearance` and returns that distance;
/// the exact global minimum is only computed for routes that pass.
/// Returns [`UNOBSTRUCTED`] for an empty route or obstacle set.
///
/// Obstacles with NaN centers never compare closer and are skipped here;
/// the routers and planner reject them as invalid input before checking.
pub fn min_clearance(route: &[Point2D], obstacles: &[Obstacle], clearance: f32) -> f32 {
    let mut min = UNOBSTRUCTED;
    for point in route {
        for obstacle in obstacles {
            let d = obstacle.distance_to(point);
            if d < min {
                min = d;
                if min < clearance {
                    return min;
                }
            }
        }
    }
    min
}

/// Result of checking a route against the obstacle set.
#[derive(Clone, Debug, PartialEq)]
pub struct ProximityReport {
    /// Does every checked point keep the clearance radius?
    pub is_clear: bool,
    /// Smallest clearance seen (exact when clear, first violation otherwise).
    pub min_clearance: f32,
    /// Index of the first waypoint (or segment start) that violates clearance.
    pub violation_at: Option<usize>,
}

/// Clearance checker over a borrowed obstacle snapshot.
#[derive(Clone, Copy, Debug)]
pub struct ProximityChecker<'a> {
    obstacles: &'a [Obstacle],
    clearance: f32,
    mode: ClearanceMode,
}

impl<'a> ProximityChecker<'a> {
    /// Create a checker with segment-bounded measurement.
    pub fn new(obstacles: &'a [Obstacle], clearance: f32) -> Self {
        Self {
            obstacles,
            clearance,
            mode: ClearanceMode::Segment,
        }
    }

    /// Use a different segment measurement.
    pub fn with_mode(mut self, mode: ClearanceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Clearance radius.
    pub fn clearance(&self) -> f32 {
        self.clearance
    }

    /// Obstacles being checked against.
    pub fn obstacles(&self) -> &'a [Obstacle] {
        self.obstacles
    }

    /// Segment measurement in use.
    pub fn mode(&self) -> ClearanceMode {
        self.mode
    }

    // =========================================================================
    // Point queries
    // =========================================================================

    /// Distance from `point` to the nearest obstacle center.
    pub fn point_clearance(&self, point: Point2D) -> f32 {
        self.nearest_obstacle(point)
            .map_or(UNOBSTRUCTED, |(_, distance)| distance)
    }

    /// Is `point` at least the clearance radius from every obstacle?
    pub fn is_point_clear(&self, point: Point2D) -> bool {
        !self
            .obstacles
            .iter()
            .any(|o| o.intrudes(&point, self.clearance))
    }

    /// Nearest obstacle to `point` and its distance.
    pub fn nearest_obstacle(&self, point: Point2D) -> Option<(Obstacle, f32)> {
        let mut nearest: Option<(Obstacle, f32)> = None;
        for obstacle in self.obstacles {
            let d = obstacle.distance_to(&point);
            match nearest {
                Some((_, best)) if best <= d => {}
                _ => nearest = Some((*obstacle, d)),
            }
        }
        nearest
    }

    // =========================================================================
    // Route queries
    // =========================================================================

    /// Smallest clearance over the route's points, short-circuiting.
    pub fn min_clearance(&self, route: &[Point2D]) -> f32 {
        min_clearance(route, self.obstacles, self.clearance)
    }

    /// Does every route point keep the clearance radius?
    pub fn is_clear(&self, route: &[Point2D]) -> bool {
        self.min_clearance(route) >= self.clearance
    }

    /// Check route points and report where the first violation happens.
    pub fn check_points(&self, route: &[Point2D]) -> ProximityReport {
        let mut min = UNOBSTRUCTED;
        for (i, point) in route.iter().enumerate() {
            let d = self.point_clearance(*point);
            min = min.min(d);
            if d < self.clearance {
                return ProximityReport {
                    is_clear: false,
                    min_clearance: d,
                    violation_at: Some(i),
                };
            }
        }
        ProximityReport {
            is_clear: true,
            min_clearance: min,
            violation_at: None,
        }
    }

    /// Smallest clearance over every connecting segment, short-circuiting.
    ///
    /// Unlike [`min_clearance`](Self::min_clearance) this is continuous: it
    /// catches an obstacle that sits between two widely spaced waypoints.
    /// A single-point route degrades to its point clearance.
    pub fn segment_clearance(&self, route: &[Point2D]) -> f32 {
        self.check_segments(route).min_clearance
    }

    /// Continuous check of every connecting segment.
    pub fn check_segments(&self, route: &[Point2D]) -> ProximityReport {
        if route.len() < 2 {
            return self.check_points(route);
        }

        let mut min = UNOBSTRUCTED;
        for (i, w) in route.windows(2).enumerate() {
            for obstacle in self.obstacles {
                let d = self.segment_distance(obstacle.center, w[0], w[1]);
                if d < min {
                    min = d;
                    if min < self.clearance {
                        return ProximityReport {
                            is_clear: false,
                            min_clearance: min,
                            violation_at: Some(i),
                        };
                    }
                }
            }
        }
        ProximityReport {
            is_clear: true,
            min_clearance: min,
            violation_at: None,
        }
    }

    #[inline]
    fn segment_distance(&self, p: Point2D, a: Point2D, b: Point2D) -> f32 {
        match self.mode {
            ClearanceMode::Segment => distance_to_segment(p, a, b),
            ClearanceMode::InfiniteLine => distance_to_line(p, a, b),
        }
    }
}
