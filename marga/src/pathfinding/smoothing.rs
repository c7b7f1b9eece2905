//! Route smoothing.
//!
//! Grid routes zig-zag between cell centers. Line-of-sight shortcutting
//! replaces runs of waypoints with a single straight segment wherever that
//! segment keeps the clearance radius.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::query::ProximityChecker;
use crate::route::Route;
use crate::routing::sample_segment;

/// Route smoothing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Step size for line-of-sight checks (plane units)
    pub los_step_size: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { los_step_size: 2.5 }
    }
}

/// Line-of-sight route smoother
pub struct RouteSmoother<'a> {
    checker: ProximityChecker<'a>,
    config: SmoothingConfig,
}

impl<'a> RouteSmoother<'a> {
    /// Create a new route smoother
    pub fn new(checker: ProximityChecker<'a>, config: SmoothingConfig) -> Self {
        Self { checker, config }
    }

    /// Create with default configuration
    pub fn with_defaults(checker: ProximityChecker<'a>) -> Self {
        Self::new(checker, SmoothingConfig::default())
    }

    /// Is the straight segment `from`..`to` clear at every sample?
    ///
    /// A segment too long to sample counts as blocked.
    pub fn has_line_of_sight(&self, from: Point2D, to: Point2D) -> bool {
        let step = if self.config.los_step_size > 0.0 {
            self.config.los_step_size
        } else {
            SmoothingConfig::default().los_step_size
        };
        sample_segment(from, to, step).is_ok_and(|samples| self.checker.is_clear(&samples))
    }

    /// Smooth a path using line-of-sight shortcuts
    ///
    /// From each kept waypoint, jumps to the furthest later waypoint that is
    /// directly visible. Endpoints are always kept.
    pub fn smooth_los(&self, path: &[Point2D]) -> Vec<Point2D> {
        if path.len() <= 2 {
            return path.to_vec();
        }

        let mut smoothed = vec![path[0]];
        let mut i = 0;

        while i < path.len() - 1 {
            let mut furthest = i + 1;
            for j in (i + 2)..path.len() {
                if self.has_line_of_sight(path[i], path[j]) {
                    furthest = j;
                }
            }
            smoothed.push(path[furthest]);
            i = furthest;
        }

        trace!(
            "[Smoothing] {} waypoints -> {}",
            path.len(),
            smoothed.len()
        );
        smoothed
    }

    /// Smooth a route, keeping it unchanged if shortcutting would not help.
    pub fn smooth_route(&self, route: &Route) -> Route {
        let smoothed = Route::new(self.smooth_los(&route.points));
        if smoothed.length <= route.length {
            smoothed
        } else {
            route.clone()
        }
    }
}
