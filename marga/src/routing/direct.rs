//! Straight-line routing.
//!
//! Samples the segment from start to end at a fixed arc-length step and
//! accepts it only if every sample keeps the clearance radius.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Obstacle, Point2D};
use crate::error::{
    PlanError, Result, require_finite, require_finite_obstacles, require_positive, require_within,
};
use crate::query::min_clearance;
use crate::route::Route;

/// Remaining distances shorter than this snap to the end point.
const END_SNAP: f32 = 1e-4;

/// Straight-line router configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectConfig {
    /// Arc-length spacing between samples
    pub step_size: f32,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self { step_size: 5.0 }
    }
}

/// Most samples a single straight route may take.
pub const MAX_SAMPLES: usize = 1 << 22;

/// Number of samples `sample_segment` will produce, checked against [`MAX_SAMPLES`].
pub(crate) fn sample_count(start: Point2D, end: Point2D, step_size: f32) -> Result<usize> {
    require_positive("step_size", step_size)?;
    let total = start.distance(&end) as f64;
    if total <= END_SNAP as f64 {
        return Ok(1);
    }
    require_within("route samples", (total / step_size as f64).floor() + 2.0, MAX_SAMPLES)
}

/// Sample the segment `start`..`end` every `step_size` units.
///
/// The exact end point is always the last sample, whether or not it falls on
/// a step boundary. A zero-length segment yields the single point `start`.
/// Segments needing more than [`MAX_SAMPLES`] samples are rejected.
pub fn sample_segment(start: Point2D, end: Point2D, step_size: f32) -> Result<Vec<Point2D>> {
    let capacity = sample_count(start, end, step_size)?;
    let total = start.distance(&end);
    if total <= END_SNAP {
        return Ok(vec![start]);
    }

    let dir = (end - start) * (1.0 / total);
    let mut points = Vec::with_capacity(capacity);
    for i in 0..capacity - 1 {
        let t = i as f32 * step_size;
        if t >= total - END_SNAP {
            break;
        }
        points.push(start + dir * t);
    }
    points.push(end);
    Ok(points)
}

/// Try the straight route from `start` to `end`.
///
/// Returns the sampled route, or [`PlanError::Blocked`] carrying the
/// clearance that failed. Never returns a partial route.
///
/// # Example
/// ```
/// use marga::core::{Obstacle, Point2D};
/// use marga::routing::try_direct_route;
///
/// let route = try_direct_route(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(100.0, 0.0),
///     &[],
///     20.0,
///     5.0,
/// )
/// .unwrap();
/// assert_eq!(route.len(), 21);
///
/// let blocked = try_direct_route(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(100.0, 0.0),
///     &[Obstacle::new(50.0, 0.0)],
///     20.0,
///     5.0,
/// );
/// assert!(blocked.is_err());
/// ```
pub fn try_direct_route(
    start: Point2D,
    end: Point2D,
    obstacles: &[Obstacle],
    clearance: f32,
    step_size: f32,
) -> Result<Route> {
    require_finite("start", start)?;
    require_finite("end", end)?;
    require_positive("clearance", clearance)?;
    require_positive("step_size", step_size)?;
    require_finite_obstacles(obstacles)?;

    let samples = sample_segment(start, end, step_size)?;
    let observed = min_clearance(&samples, obstacles, clearance);

    if observed < clearance {
        debug!(
            "[Direct] BLOCKED: ({:.1},{:.1}) -> ({:.1},{:.1}), clearance {:.2} < {:.2}",
            start.x, start.y, end.x, end.y, observed, clearance
        );
        return Err(PlanError::Blocked {
            min_clearance: observed,
        });
    }

    trace!(
        "[Direct] clear: {} samples, min clearance {:.2}",
        samples.len(),
        observed
    );
    Ok(Route::new(samples))
}

/// Straight-line router bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct DirectRouter {
    config: DirectConfig,
}

impl DirectRouter {
    /// Create a new direct router
    pub fn new(config: DirectConfig) -> Self {
        Self { config }
    }

    /// Router configuration
    pub fn config(&self) -> &DirectConfig {
        &self.config
    }

    /// Try the straight route; see [`try_direct_route`].
    pub fn route(
        &self,
        start: Point2D,
        end: Point2D,
        obstacles: &[Obstacle],
        clearance: f32,
    ) -> Result<Route> {
        try_direct_route(start, end, obstacles, clearance, self.config.step_size)
    }
}
