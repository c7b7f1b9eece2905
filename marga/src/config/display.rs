//! Display settings section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for status text shown to a user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Plane units per displayed meter
    #[serde(default = "defaults::units_per_meter")]
    pub units_per_meter: f32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            units_per_meter: defaults::units_per_meter(),
        }
    }
}
