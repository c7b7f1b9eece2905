//! Proximity queries between routes and obstacles.
//!
//! ```rust
//! use marga::core::{Obstacle, Point2D};
//! use marga::query::{ProximityChecker, min_clearance};
//!
//! let obstacles = [Obstacle::new(50.0, 0.0)];
//! let route = [Point2D::new(0.0, 0.0), Point2D::new(50.0, 30.0)];
//!
//! assert!(min_clearance(&route, &obstacles, 20.0) >= 20.0);
//!
//! let checker = ProximityChecker::new(&obstacles, 20.0);
//! assert!(checker.is_clear(&route));
//! ```

mod proximity;

pub use proximity::{
    ClearanceMode, ProximityChecker, ProximityReport, UNOBSTRUCTED, min_clearance,
};
