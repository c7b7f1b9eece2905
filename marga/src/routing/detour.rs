//! Greedy local detour walker.
//!
//! Walks toward the goal one short step at a time. When the next step would
//! enter an obstacle's clearance radius the walker sidesteps perpendicular to
//! its heading, away from that obstacle, and tries again from there.
//!
//! The walk is cheap but has no global view: near concave obstacle clusters
//! it can bounce between the same few positions. Every walk is therefore
//! capped at a step budget proportional to the straight-line distance.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Obstacle, Point2D};
use crate::error::{
    DetourFailure, PlanError, Result, require_finite, require_finite_obstacles, require_positive,
    require_within,
};
use crate::route::{Route, push_distinct};

/// Smallest step budget granted to any walk, however short.
const MIN_STEP_BUDGET: usize = 16;

/// Largest step budget granted to any walk.
pub const MAX_DETOUR_STEPS: usize = 1 << 24;

/// Detour walker configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetourConfig {
    /// Length of one straight step toward the goal
    pub step_length: f32,
    /// Sidestep length as a multiple of the clearance radius
    pub sidestep_factor: f32,
    /// Distance from the goal at which the walk counts as arrived
    pub arrival_tolerance: f32,
    /// Step budget per unit of straight-line distance (in steps of `step_length`)
    pub max_step_factor: f32,
}

impl Default for DetourConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            sidestep_factor: 1.5,
            arrival_tolerance: 1.0,
            max_step_factor: 50.0,
        }
    }
}

impl DetourConfig {
    /// Default configuration with a custom step length.
    pub fn with_step_length(step_length: f32) -> Self {
        Self {
            step_length,
            ..Self::default()
        }
    }

    /// Step budget for a walk covering `distance`.
    ///
    /// Walks needing more than [`MAX_DETOUR_STEPS`] are rejected up front.
    pub fn step_budget(&self, distance: f32) -> Result<usize> {
        let steps =
            (self.max_step_factor as f64 * distance as f64 / self.step_length as f64).ceil();
        if steps.is_nan() || steps <= 0.0 {
            return Ok(MIN_STEP_BUDGET);
        }
        require_within("detour steps", steps, MAX_DETOUR_STEPS).map(|s| s.max(MIN_STEP_BUDGET))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_positive("step_length", self.step_length)?;
        require_positive("sidestep_factor", self.sidestep_factor)?;
        require_positive("arrival_tolerance", self.arrival_tolerance)?;
        require_positive("max_step_factor", self.max_step_factor)
    }
}

/// Walk from `start` to `end` with the default detour settings and the given
/// step length.
///
/// Returns the visited waypoints (consecutive duplicates removed) ending at
/// exactly `end`, or [`PlanError::Failed`] once the step budget runs out.
/// The walker only looks one step ahead, so the returned route is not
/// guaranteed to keep clearance along its sidesteps; callers that need that
/// guarantee validate it with a [`ProximityChecker`](crate::query::ProximityChecker).
pub fn detour_route(
    start: Point2D,
    end: Point2D,
    obstacles: &[Obstacle],
    clearance: f32,
    step_length: f32,
) -> Result<Route> {
    DetourRouter::new(DetourConfig::with_step_length(step_length)).route(
        start, end, obstacles, clearance,
    )
}

/// Greedy detour walker bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct DetourRouter {
    config: DetourConfig,
}

impl DetourRouter {
    /// Create a new detour router
    pub fn new(config: DetourConfig) -> Self {
        Self { config }
    }

    /// Router configuration
    pub fn config(&self) -> &DetourConfig {
        &self.config
    }

    /// Walk from `start` to `end`; see [`detour_route`].
    pub fn route(
        &self,
        start: Point2D,
        end: Point2D,
        obstacles: &[Obstacle],
        clearance: f32,
    ) -> Result<Route> {
        require_finite("start", start)?;
        require_finite("end", end)?;
        require_positive("clearance", clearance)?;
        require_finite_obstacles(obstacles)?;
        self.config.validate()?;

        let limit = self.config.step_budget(start.distance(&end))?;
        let sidestep = self.config.sidestep_factor * clearance;

        let mut points = vec![start];
        let mut pos = start;
        let mut steps = 0usize;
        let mut sidesteps = 0usize;

        while pos.distance(&end) >= self.config.arrival_tolerance {
            if steps >= limit {
                debug!(
                    "[Detour] FAILED: no arrival after {} steps ({} sidesteps), {:.1} from goal",
                    steps,
                    sidesteps,
                    pos.distance(&end)
                );
                return Err(PlanError::Failed {
                    reason: DetourFailure::StepLimitExceeded { steps, limit },
                });
            }

            let to_goal = end - pos;
            let remaining = to_goal.length();
            let heading = to_goal.normalize();
            let next = pos + heading * self.config.step_length.min(remaining);

            pos = match nearest_intruder(&next, obstacles, clearance) {
                Some(obstacle) => {
                    sidesteps += 1;
                    let turn = away_from(heading, obstacle.center - pos);
                    trace!(
                        "[Detour] sidestep at ({:.1},{:.1}) around ({:.1},{:.1})",
                        pos.x, pos.y, obstacle.center.x, obstacle.center.y
                    );
                    pos + turn * sidestep
                }
                None => next,
            };
            push_distinct(&mut points, pos);
            steps += 1;
        }

        push_distinct(&mut points, end);
        debug!(
            "[Detour] arrived: {} waypoints, {} steps, {} sidesteps",
            points.len(),
            steps,
            sidesteps
        );
        Ok(Route::new(points))
    }
}

/// The closest obstacle whose clearance radius contains `point`.
fn nearest_intruder(point: &Point2D, obstacles: &[Obstacle], clearance: f32) -> Option<Obstacle> {
    obstacles
        .iter()
        .filter(|o| o.intrudes(point, clearance))
        .min_by(|a, b| a.distance_to(point).total_cmp(&b.distance_to(point)))
        .copied()
}

/// Unit perpendicular to `heading` on the side away from `to_obstacle`.
///
/// An obstacle dead ahead turns counter-clockwise.
fn away_from(heading: Point2D, to_obstacle: Point2D) -> Point2D {
    if heading.cross(&to_obstacle) > 0.0 {
        -heading.perp()
    } else {
        heading.perp()
    }
}
