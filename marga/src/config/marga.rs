//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::{GridConfig, SmoothingConfig};
use crate::planner::PlannerConfig;
use crate::routing::{DetourConfig, DirectConfig};

use super::display::DisplaySection;
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::planner::{PlannerSection, SmoothingSection};
use super::routing::{DetourSection, DirectSection};

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerSection,

    /// Straight-line router settings
    #[serde(default)]
    pub direct: DirectSection,

    /// Detour walker settings
    #[serde(default)]
    pub detour: DetourSection,

    /// Grid search settings
    #[serde(default)]
    pub grid: GridSection,

    /// Route smoothing settings
    #[serde(default)]
    pub smoothing: SmoothingSection,

    /// Display settings
    #[serde(default)]
    pub display: DisplaySection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the straight-line router config
    pub fn direct_config(&self) -> DirectConfig {
        self.direct.to_direct_config()
    }

    /// Get the detour walker config
    pub fn detour_config(&self) -> DetourConfig {
        self.detour.to_detour_config()
    }

    /// Get the grid search config
    pub fn grid_config(&self) -> GridConfig {
        self.grid.to_grid_config()
    }

    /// Get the smoothing config
    pub fn smoothing_config(&self) -> SmoothingConfig {
        SmoothingConfig {
            los_step_size: self.smoothing.los_step_size,
        }
    }

    /// Convert to PlannerConfig for RoutePlanner
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            clearance: self.planner.clearance,
            fallback: self.planner.fallback,
            clearance_mode: self.planner.clearance_mode,
            anchor_endpoints: self.planner.anchor_endpoints,
            smooth: self.smoothing.enabled,
            direct: self.direct_config(),
            detour: self.detour_config(),
            grid: self.grid_config(),
            smoothing: self.smoothing_config(),
        }
    }

    /// Plane units per displayed meter
    pub fn units_per_meter(&self) -> f32 {
        self.display.units_per_meter
    }
}
