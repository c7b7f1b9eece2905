//! Unified configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file. Every field has a
//! default, so a file only needs the values it changes:
//!
//! ```yaml
//! planner:
//!   clearance: 20.0
//!   fallback: grid
//! grid:
//!   cell_size: 5.0
//! ```

mod defaults;
mod display;
mod error;
mod grid;
mod marga;
mod planner;
mod routing;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use display::DisplaySection;
pub use grid::GridSection;
pub use planner::{PlannerSection, SmoothingSection};
pub use routing::{DetourSection, DirectSection};
