//! Planning results and their display text.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::route::Route;

use super::state::PlanState;

/// Router that produced the final route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Straight line from start to end
    Direct,
    /// A* over the obstacle grid
    Grid,
    /// Greedy detour walk
    Detour,
}

/// A successful planning request
#[derive(Clone, Debug)]
pub struct PlanOutcome {
    /// The planned route
    pub route: Route,
    /// Router that produced it
    pub strategy: Strategy,
    /// Smallest distance from any route point to any obstacle
    pub min_clearance: f32,
    /// Smallest distance from any connecting segment to any obstacle,
    /// measured with the planner's [`ClearanceMode`](crate::query::ClearanceMode)
    pub segment_clearance: f32,
    /// Clearance that blocked the straight route, if it was tried and failed
    pub direct_blocked_clearance: Option<f32>,
    /// Cells expanded by the grid search, if it ran
    pub nodes_expanded: Option<usize>,
    /// States visited, `Idle` first and `Done` last
    pub states: Vec<PlanState>,
}

impl PlanOutcome {
    /// Did the straight route work?
    pub fn is_direct(&self) -> bool {
        self.strategy == Strategy::Direct
    }

    /// Route length in display units, truncated to whole units
    pub fn whole_display_units(&self, units_per_display_unit: f32) -> i64 {
        self.route.length_in(units_per_display_unit) as i64
    }

    /// One-line status message for a display layer.
    pub fn summary(&self, units_per_meter: f32) -> String {
        format!(
            "Route is set. Distance: {} meters.",
            self.whole_display_units(units_per_meter)
        )
    }
}

/// Status line for any planning result.
pub fn status_line(result: &Result<PlanOutcome, PlanError>, units_per_meter: f32) -> String {
    match result {
        Ok(outcome) => outcome.summary(units_per_meter),
        Err(e) => e.summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;

    fn outcome(length: f32) -> PlanOutcome {
        PlanOutcome {
            route: Route::new(vec![Point2D::ZERO, Point2D::new(length, 0.0)]),
            strategy: Strategy::Direct,
            min_clearance: 50.0,
            segment_clearance: 50.0,
            direct_blocked_clearance: None,
            nodes_expanded: None,
            states: vec![PlanState::Idle, PlanState::TryDirect, PlanState::Done],
        }
    }

    #[test]
    fn test_summary_truncates() {
        assert_eq!(outcome(257.0).summary(10.0), "Route is set. Distance: 25 meters.");
        assert!(outcome(257.0).is_direct());
    }

    #[test]
    fn test_status_line_for_error() {
        let result = Err(PlanError::Blocked { min_clearance: 12.34 });
        assert_eq!(
            status_line(&result, 10.0),
            "Obstacle too close! Clearance 12.3 is below the safe radius."
        );
        assert_eq!(
            status_line(&Ok(outcome(100.0)), 10.0),
            "Route is set. Distance: 10 meters."
        );
    }
}
