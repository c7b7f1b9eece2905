//! Planner and smoothing configuration sections.

use serde::{Deserialize, Serialize};

use crate::planner::FallbackStrategy;
use crate::query::ClearanceMode;

use super::defaults;

/// Planner settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Minimum distance between the route and any obstacle center
    #[serde(default = "defaults::clearance")]
    pub clearance: f32,

    /// Search used when the straight route is blocked ("grid" or "detour")
    #[serde(default)]
    pub fallback: FallbackStrategy,

    /// Segment measurement for route validation ("segment" or "infinite_line")
    #[serde(default)]
    pub clearance_mode: ClearanceMode,

    /// Start and end grid routes at the exact request points
    #[serde(default = "defaults::enabled")]
    pub anchor_endpoints: bool,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            clearance: defaults::clearance(),
            fallback: FallbackStrategy::default(),
            clearance_mode: ClearanceMode::default(),
            anchor_endpoints: true,
        }
    }
}

/// Route smoothing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSection {
    /// Enable line-of-sight smoothing of grid routes
    #[serde(default)]
    pub enabled: bool,

    /// Line-of-sight check step (plane units)
    #[serde(default = "defaults::los_step")]
    pub los_step_size: f32,
}

impl Default for SmoothingSection {
    fn default() -> Self {
        Self {
            enabled: false,
            los_step_size: defaults::los_step(),
        }
    }
}
