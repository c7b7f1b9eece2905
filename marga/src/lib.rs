//! # Marga: Collision-Free Route Planning on a 2D Plane
//!
//! Plans a route between two points on a plane scattered with circular
//! obstacles, keeping every waypoint at least a clearance radius away from
//! every obstacle center.
//!
//! ## Features
//!
//! - **Straight-Line Fast Path**: samples the direct segment and accepts it
//!   when it clears every obstacle
//! - **Grid A* Fallback**: shortest 8-connected route over an
//!   obstacle-inflated grid when the straight line is blocked
//! - **Local Detour Walker**: cheap greedy alternative to the grid search,
//!   bounded so it always terminates
//! - **Structured Failures**: blocked, not found, failed and invalid input
//!   are distinct errors, never an empty route
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{Obstacle, Point2D, RoutePlanner, Strategy};
//!
//! let obstacles = [Obstacle::new(150.0, 100.0)];
//! let planner = RoutePlanner::with_defaults();
//!
//! let outcome = planner
//!     .plan(Point2D::new(100.0, 100.0), Point2D::new(200.0, 100.0), &obstacles)
//!     .unwrap();
//!
//! assert_eq!(outcome.strategy, Strategy::Grid);
//! assert!(outcome.min_clearance >= 20.0);
//! println!("{}", outcome.summary(10.0));
//! ```
//!
//! ## Coordinate Frame
//!
//! Plane units are arbitrary; the default grid covers `[0, 800)²` with
//! 5-unit cells. Obstacles are points; the clearance radius is the same for
//! all of them and is part of the planner configuration.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Points, grid cells, obstacles and distance primitives
//! - [`query`]: Route-to-obstacle clearance checks
//! - [`routing`]: Straight-line router and detour walker
//! - [`pathfinding`]: Grid A* search and route smoothing
//! - [`planner`]: The orchestrating state machine
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!          start, end, &[Obstacle]
//!                     │
//!                     ▼
//!            ┌─────────────────┐   clear    ┌────────────────┐
//!            │  Direct Router  │───────────►│   PlanOutcome  │
//!            └────────┬────────┘            └────────────────┘
//!                     │ Blocked                      ▲
//!          ┌──────────┴──────────┐                   │
//!          ▼                     ▼                   │
//!   ┌─────────────┐       ┌─────────────┐            │
//!   │  Grid A*    │       │   Detour    │            │
//!   │ (default)   │       │   Walker    │            │
//!   └──────┬──────┘       └──────┬──────┘            │
//!          │                     │ validated         │
//!          └──────────┬──────────┘                   │
//!                     └──────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod pathfinding;
pub mod planner;
pub mod query;
pub mod route;
pub mod routing;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MargaConfig};
pub use crate::core::{GridCoord, Obstacle, Point2D};
pub use error::{DetourFailure, InvalidInput, PlanError, Result, SearchFailure};
pub use planner::{
    FallbackStrategy, PlanOutcome, PlanState, PlannerConfig, RoutePlanner, Strategy, status_line,
};
pub use query::{ClearanceMode, ProximityChecker, min_clearance};
pub use route::Route;

// Re-export the per-component entry points
pub use pathfinding::{GridConfig, find_path};
pub use routing::{detour_route, try_direct_route};
