//! Planning error types.
//!
//! Every way a planning request can end without a route has its own variant,
//! so callers can tell "the straight line is blocked" apart from "no route
//! exists" apart from "the request itself was malformed".

use thiserror::Error;

use crate::core::{Obstacle, Point2D};

/// Why the grid search ended without reaching the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Start cell lies inside an inflated obstacle
    StartBlocked,
    /// Goal cell lies inside an inflated obstacle
    GoalBlocked,
    /// Frontier emptied without reaching the goal cell
    NoPath,
    /// Iteration cap hit before the frontier emptied
    MaxIterationsExceeded,
}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SearchFailure::StartBlocked => "start cell is blocked",
            SearchFailure::GoalBlocked => "goal cell is blocked",
            SearchFailure::NoPath => "frontier exhausted",
            SearchFailure::MaxIterationsExceeded => "iteration limit reached",
        };
        f.write_str(text)
    }
}

/// Why the detour walk was abandoned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetourFailure {
    /// The walk used up its step budget without arriving
    StepLimitExceeded {
        /// Steps taken
        steps: usize,
        /// Step budget for this request
        limit: usize,
    },
    /// The walk arrived but a sidestep cut inside the clearance radius
    UnsafeRoute {
        /// Smallest clearance along the walked route
        min_clearance: f32,
    },
}

impl std::fmt::Display for DetourFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetourFailure::StepLimitExceeded { steps, limit } => {
                write!(f, "gave up after {} steps (limit {})", steps, limit)
            }
            DetourFailure::UnsafeRoute { min_clearance } => {
                write!(f, "walked route comes within {:.2} of an obstacle", min_clearance)
            }
        }
    }
}

/// A request rejected before any search work.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidInput {
    /// A parameter that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A parameter that may be zero was negative
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A coordinate or parameter is NaN or infinite
    #[error("{name} is not finite")]
    NonFinite {
        /// Parameter or point name
        name: &'static str,
    },

    /// An endpoint lies outside the search grid
    #[error("{name} ({:.1}, {:.1}) lies outside the {extent}x{extent} grid", .point.x, .point.y)]
    OutOfBounds {
        /// Which endpoint ("start" or "end")
        name: &'static str,
        /// The offending point
        point: Point2D,
        /// Grid side length in plane units
        extent: f32,
    },

    /// The request would need more samples, steps or cells than allowed
    #[error("{name} would need {requested:.0} elements, more than the limit of {limit}")]
    TooLarge {
        /// What was being sized
        name: &'static str,
        /// Requested element count, possibly infinite or NaN
        requested: f64,
        /// Largest accepted count
        limit: usize,
    },
}

/// Planning error type
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlanError {
    /// The straight route passes too close to an obstacle.
    #[error("Straight route blocked: clearance {min_clearance:.2} below radius")]
    Blocked {
        /// Smallest sampled clearance along the straight line
        min_clearance: f32,
    },

    /// Grid search could not reach the goal.
    #[error("No route found: {reason} after expanding {nodes_expanded} cells")]
    NotFound {
        /// Why the search stopped
        reason: SearchFailure,
        /// Cells expanded before stopping
        nodes_expanded: usize,
    },

    /// The detour walk did not produce a usable route.
    #[error("Detour failed: {reason}")]
    Failed {
        /// Why the walk stopped
        reason: DetourFailure,
    },

    /// The request was malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl PlanError {
    /// Short error code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blocked { .. } => "BLOCKED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Failed { .. } => "FAILED",
            Self::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    /// Can the request still succeed with another strategy?
    ///
    /// Only a blocked straight line is recoverable; the planner falls back
    /// to a search when it sees one.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Smallest clearance observed before failing, when one was measured.
    pub fn min_clearance(&self) -> Option<f32> {
        match self {
            Self::Blocked { min_clearance } => Some(*min_clearance),
            Self::Failed {
                reason: DetourFailure::UnsafeRoute { min_clearance },
            } => Some(*min_clearance),
            _ => None,
        }
    }

    /// One-line status message for a display layer.
    pub fn summary(&self) -> String {
        match self {
            Self::Blocked { min_clearance } => format!(
                "Obstacle too close! Clearance {:.1} is below the safe radius.",
                min_clearance
            ),
            Self::NotFound { reason, .. } => format!("No route exists: {}.", reason),
            Self::Failed { reason } => format!("No route exists: detour {}.", reason),
            Self::InvalidInput(e) => format!("Cannot plan: {}.", e),
        }
    }
}

/// Result alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;

/// Reject non-positive or non-finite parameters.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidInput::NonFinite { name }.into());
    }
    if value <= 0.0 {
        return Err(InvalidInput::NonPositive { name, value }.into());
    }
    Ok(())
}

/// Reject negative or non-finite parameters.
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidInput::NonFinite { name }.into());
    }
    if value < 0.0 {
        return Err(InvalidInput::Negative { name, value }.into());
    }
    Ok(())
}

/// Convert an element count to `usize`, rejecting NaN, infinity and counts above `limit`.
pub(crate) fn require_within(name: &'static str, requested: f64, limit: usize) -> Result<usize> {
    if requested.is_finite() && requested >= 0.0 && requested <= limit as f64 {
        Ok(requested as usize)
    } else {
        Err(InvalidInput::TooLarge {
            name,
            requested,
            limit,
        }
        .into())
    }
}

/// Reject points with NaN or infinite coordinates.
pub(crate) fn require_finite(name: &'static str, point: Point2D) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite { name }.into())
    }
}

/// Reject obstacle sets containing a NaN or infinite center.
pub(crate) fn require_finite_obstacles(obstacles: &[Obstacle]) -> Result<()> {
    if obstacles.iter().all(|o| o.center.is_finite()) {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite { name: "obstacle" }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanError::NotFound {
            reason: SearchFailure::NoPath,
            nodes_expanded: 42,
        };
        assert_eq!(
            err.to_string(),
            "No route found: frontier exhausted after expanding 42 cells"
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(PlanError::Blocked { min_clearance: 1.0 }.code(), "BLOCKED");
        let invalid: PlanError = InvalidInput::NonFinite { name: "start" }.into();
        assert_eq!(invalid.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_only_blocked_is_recoverable() {
        assert!(PlanError::Blocked { min_clearance: 0.0 }.is_recoverable());
        assert!(
            !PlanError::Failed {
                reason: DetourFailure::StepLimitExceeded { steps: 10, limit: 10 }
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("cell_size", 5.0).is_ok());
        assert_eq!(
            require_positive("cell_size", 0.0),
            Err(PlanError::InvalidInput(InvalidInput::NonPositive {
                name: "cell_size",
                value: 0.0
            }))
        );
        assert!(matches!(
            require_positive("cell_size", f32::NAN),
            Err(PlanError::InvalidInput(InvalidInput::NonFinite { .. }))
        ));
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("inflation_margin", 0.0).is_ok());
        assert_eq!(
            require_non_negative("inflation_margin", -1.0),
            Err(PlanError::InvalidInput(InvalidInput::Negative {
                name: "inflation_margin",
                value: -1.0
            }))
        );
    }

    #[test]
    fn test_require_within() {
        assert_eq!(require_within("samples", 42.0, 100), Ok(42));
        assert_eq!(require_within("samples", 100.0, 100), Ok(100));
        assert!(matches!(
            require_within("samples", 1e30, 100),
            Err(PlanError::InvalidInput(InvalidInput::TooLarge {
                name: "samples",
                limit: 100,
                ..
            }))
        ));
        assert!(require_within("samples", f64::INFINITY, 100).is_err());
        assert!(require_within("samples", f64::NAN, 100).is_err());
    }

    #[test]
    fn test_require_finite_obstacles() {
        assert!(require_finite_obstacles(&[]).is_ok());
        assert!(require_finite_obstacles(&[Obstacle::new(1.0, 2.0)]).is_ok());
        assert_eq!(
            require_finite_obstacles(&[Obstacle::new(1.0, 2.0), Obstacle::new(f32::NAN, 0.0)]),
            Err(PlanError::InvalidInput(InvalidInput::NonFinite { name: "obstacle" }))
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = InvalidInput::OutOfBounds {
            name: "end",
            point: Point2D::new(900.0, 10.0),
            extent: 800.0,
        };
        assert_eq!(
            err.to_string(),
            "end (900.0, 10.0) lies outside the 800x800 grid"
        );
    }
}
