//! Planning request state machine states.

use serde::{Deserialize, Serialize};

/// Which search runs when the straight route is blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// A* over the obstacle-inflated grid
    #[default]
    Grid,
    /// Greedy local detour walk
    Detour,
}

impl FallbackStrategy {
    /// Strategy name for logging
    pub fn name(&self) -> &'static str {
        match self {
            FallbackStrategy::Grid => "Grid",
            FallbackStrategy::Detour => "Detour",
        }
    }
}

/// Planning request state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanState {
    /// Request received, nothing tried yet
    Idle,

    /// Trying the straight route
    TryDirect,

    /// Straight route blocked, running the fallback search
    Fallback {
        /// Search in use
        strategy: FallbackStrategy,
    },

    /// Request finished (with or without a route)
    Done,
}

impl PlanState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlanState::Done)
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PlanState::Idle => "Idle",
            PlanState::TryDirect => "TryDirect",
            PlanState::Fallback { .. } => "Fallback",
            PlanState::Done => "Done",
        }
    }
}

impl std::fmt::Display for PlanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanState::Fallback { strategy } => write!(f, "Fallback({})", strategy.name()),
            other => f.write_str(other.name()),
        }
    }
}
