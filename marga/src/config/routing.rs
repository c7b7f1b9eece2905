//! Straight-line and detour router configuration sections.

use serde::{Deserialize, Serialize};

use crate::routing::{DetourConfig, DirectConfig};

use super::defaults;

/// Straight-line router settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectSection {
    /// Sample spacing along the straight route
    #[serde(default = "defaults::step_size")]
    pub step_size: f32,
}

impl Default for DirectSection {
    fn default() -> Self {
        Self {
            step_size: defaults::step_size(),
        }
    }
}

impl DirectSection {
    /// Convert to DirectConfig
    pub fn to_direct_config(&self) -> DirectConfig {
        DirectConfig {
            step_size: self.step_size,
        }
    }
}

/// Detour walker settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetourSection {
    /// Straight step length
    #[serde(default = "defaults::detour_step_length")]
    pub step_length: f32,

    /// Sidestep length as a multiple of the clearance radius
    #[serde(default = "defaults::sidestep_factor")]
    pub sidestep_factor: f32,

    /// Arrival distance from the goal
    #[serde(default = "defaults::arrival_tolerance")]
    pub arrival_tolerance: f32,

    /// Step budget per unit of straight-line distance
    #[serde(default = "defaults::max_step_factor")]
    pub max_step_factor: f32,
}

impl Default for DetourSection {
    fn default() -> Self {
        Self {
            step_length: defaults::detour_step_length(),
            sidestep_factor: defaults::sidestep_factor(),
            arrival_tolerance: defaults::arrival_tolerance(),
            max_step_factor: defaults::max_step_factor(),
        }
    }
}

impl DetourSection {
    /// Convert to DetourConfig
    pub fn to_detour_config(&self) -> DetourConfig {
        DetourConfig {
            step_length: self.step_length,
            sidestep_factor: self.sidestep_factor,
            arrival_tolerance: self.arrival_tolerance,
            max_step_factor: self.max_step_factor,
        }
    }
}
