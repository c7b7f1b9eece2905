//! Route planning orchestrator.
//!
//! Every request walks the same state machine:
//!
//! ```text
//! Idle ──► TryDirect ──(clear)──────────────────────► Done(route)
//!              │
//!              └─(blocked)──► Fallback(Grid | Detour) ──► Done(route | no route)
//! ```
//!
//! The planner holds configuration only. Obstacles are borrowed for one call,
//! and each call builds its own search state, so a single planner can serve
//! several threads at once.

mod outcome;
mod state;

pub use outcome::{PlanOutcome, Strategy, status_line};
pub use state::{FallbackStrategy, PlanState};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Obstacle, Point2D};
use crate::error::{
    DetourFailure, PlanError, Result, require_finite, require_finite_obstacles,
    require_non_negative, require_positive,
};
use crate::pathfinding::astar::require_inside;
use crate::pathfinding::{AStarPlanner, GridConfig, ObstacleGrid, RouteSmoother, SmoothingConfig};
use crate::query::{ClearanceMode, ProximityChecker};
use crate::route::Route;
use crate::routing::{DetourConfig, DetourRouter, DirectConfig, DirectRouter, sample_count};

/// Route planner configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minimum allowed distance between the route and any obstacle center
    pub clearance: f32,
    /// Search used when the straight route is blocked
    pub fallback: FallbackStrategy,
    /// How route segments are measured for the reported segment clearance
    pub clearance_mode: ClearanceMode,
    /// Replace the grid route's first and last cell centers with the exact
    /// start and end points
    pub anchor_endpoints: bool,
    /// Apply line-of-sight smoothing to grid routes
    pub smooth: bool,
    /// Straight-line router settings
    pub direct: DirectConfig,
    /// Detour walker settings
    pub detour: DetourConfig,
    /// Grid search settings
    pub grid: GridConfig,
    /// Smoothing settings
    pub smoothing: SmoothingConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            clearance: 20.0,
            fallback: FallbackStrategy::Grid,
            clearance_mode: ClearanceMode::Segment,
            anchor_endpoints: true,
            smooth: false,
            direct: DirectConfig::default(),
            detour: DetourConfig::default(),
            grid: GridConfig::default(),
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Default configuration with a custom clearance radius
    pub fn with_clearance(clearance: f32) -> Self {
        Self {
            clearance,
            ..Default::default()
        }
    }

    /// Use a different fallback search
    pub fn with_fallback(mut self, fallback: FallbackStrategy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Enable or disable smoothing of grid routes
    pub fn with_smoothing(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

/// Collision-free route planner
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    /// Create a new route planner
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route from `start` to `end` around `obstacles`.
    ///
    /// Tries the straight line first and falls back to the configured search
    /// when it is blocked. Every returned route keeps the clearance radius at
    /// each of its points.
    pub fn plan(&self, start: Point2D, end: Point2D, obstacles: &[Obstacle]) -> Result<PlanOutcome> {
        let mut states = vec![PlanState::Idle];

        if let Err(e) = self.validate(start, end, obstacles) {
            debug!("[Planner] rejected request: {}", e);
            return Err(e);
        }

        let checker = ProximityChecker::new(obstacles, self.config.clearance)
            .with_mode(self.config.clearance_mode);

        self.transition(&mut states, PlanState::TryDirect);
        let direct = DirectRouter::new(self.config.direct.clone());
        let blocked_clearance = match direct.route(start, end, obstacles, self.config.clearance) {
            Ok(route) => {
                self.transition(&mut states, PlanState::Done);
                return Ok(PlanOutcome {
                    min_clearance: checker.min_clearance(&route.points),
                    segment_clearance: checker.segment_clearance(&route.points),
                    route,
                    strategy: Strategy::Direct,
                    direct_blocked_clearance: None,
                    nodes_expanded: None,
                    states,
                });
            }
            Err(PlanError::Blocked { min_clearance }) => min_clearance,
            Err(e) => return Err(e),
        };

        let strategy = self.config.fallback;
        self.transition(&mut states, PlanState::Fallback { strategy });

        let fallback = match strategy {
            FallbackStrategy::Grid => self.grid_fallback(start, end, obstacles, &checker),
            FallbackStrategy::Detour => self.detour_fallback(start, end, obstacles, &checker),
        };

        self.transition(&mut states, PlanState::Done);
        let (route, strategy, nodes_expanded) = match fallback {
            Ok(found) => found,
            Err(e) => {
                debug!("[Planner] no route ({}): {}", e.code(), e);
                return Err(e);
            }
        };

        Ok(PlanOutcome {
            min_clearance: checker.min_clearance(&route.points),
            segment_clearance: checker.segment_clearance(&route.points),
            route,
            strategy,
            direct_blocked_clearance: Some(blocked_clearance),
            nodes_expanded,
            states,
        })
    }

    fn grid_fallback(
        &self,
        start: Point2D,
        end: Point2D,
        obstacles: &[Obstacle],
        checker: &ProximityChecker<'_>,
    ) -> Result<(Route, Strategy, Option<usize>)> {
        let grid = ObstacleGrid::build(obstacles, self.config.clearance, &self.config.grid)?;
        let path = AStarPlanner::new(&grid, self.config.grid.max_iterations)
            .find_path_world(start, end)?;

        let mut route = path.route;
        if self.config.anchor_endpoints {
            let anchored = anchor(&route, start, end);
            if checker.is_clear(&anchored.points) {
                route = anchored;
            } else {
                warn!(
                    "[Planner] exact endpoints violate clearance; keeping cell centers \
                     (inflation margin {:.2} may be too small)",
                    self.config.grid.inflation_margin
                );
            }
        }

        if self.config.smooth {
            route = RouteSmoother::new(*checker, self.config.smoothing.clone()).smooth_route(&route);
        }

        Ok((route, Strategy::Grid, Some(path.nodes_expanded)))
    }

    fn detour_fallback(
        &self,
        start: Point2D,
        end: Point2D,
        obstacles: &[Obstacle],
        checker: &ProximityChecker<'_>,
    ) -> Result<(Route, Strategy, Option<usize>)> {
        let route = DetourRouter::new(self.config.detour.clone()).route(
            start,
            end,
            obstacles,
            self.config.clearance,
        )?;

        let report = checker.check_points(&route.points);
        if !report.is_clear {
            debug!(
                "[Planner] detour route unsafe at waypoint {:?}, clearance {:.2}",
                report.violation_at, report.min_clearance
            );
            return Err(PlanError::Failed {
                reason: DetourFailure::UnsafeRoute {
                    min_clearance: report.min_clearance,
                },
            });
        }
        Ok((route, Strategy::Detour, None))
    }

    /// Reject malformed requests before any routing work.
    fn validate(&self, start: Point2D, end: Point2D, obstacles: &[Obstacle]) -> Result<()> {
        require_finite("start", start)?;
        require_finite("end", end)?;
        require_finite_obstacles(obstacles)?;
        require_positive("clearance", self.config.clearance)?;
        sample_count(start, end, self.config.direct.step_size)?;

        match self.config.fallback {
            FallbackStrategy::Grid => {
                let grid = &self.config.grid;
                grid.cells_per_side()?;
                require_non_negative("inflation_margin", grid.inflation_margin)?;
                require_inside("start", start, grid.grid_extent)?;
                require_inside("end", end, grid.grid_extent)?;
            }
            FallbackStrategy::Detour => {
                self.config.detour.validate()?;
                self.config.detour.step_budget(start.distance(&end))?;
            }
        }

        if self.config.smooth {
            require_positive("los_step_size", self.config.smoothing.los_step_size)?;
        }
        Ok(())
    }

    fn transition(&self, states: &mut Vec<PlanState>, next: PlanState) {
        if let Some(current) = states.last() {
            debug!("[Planner] {} -> {}", current, next);
        }
        states.push(next);
    }
}

/// Swap the route's first and last waypoints for the exact endpoints.
fn anchor(route: &Route, start: Point2D, end: Point2D) -> Route {
    let mut points = route.points.clone();
    match points.len() {
        0 | 1 => points = vec![start, end],
        n => {
            points[0] = start;
            points[n - 1] = end;
        }
    }
    Route::deduplicated(points)
}
