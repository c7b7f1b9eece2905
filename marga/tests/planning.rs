//! End-to-end planning tests through the public API.

mod common;

use approx::assert_relative_eq;
use marga::{
    FallbackStrategy, GridConfig, MargaConfig, Obstacle, PlanError, PlanState, PlannerConfig,
    Point2D, RoutePlanner, SearchFailure, Strategy, detour_route, find_path, min_clearance,
    status_line, try_direct_route,
};

use common::CLEARANCE;

// ============================================================================
// Direct router
// ============================================================================

#[test]
fn test_direct_open_field() {
    let route = try_direct_route(
        Point2D::new(0.0, 0.0),
        Point2D::new(100.0, 0.0),
        &[],
        CLEARANCE,
        5.0,
    )
    .unwrap();

    assert_eq!(route.len(), 21);
    assert_eq!(route.points[0], Point2D::new(0.0, 0.0));
    assert_eq!(route.points[20], Point2D::new(100.0, 0.0));
    assert!(route.points.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_direct_blocked_by_obstacle_on_line() {
    let result = try_direct_route(
        Point2D::new(0.0, 0.0),
        Point2D::new(100.0, 0.0),
        &[Obstacle::new(50.0, 0.0)],
        CLEARANCE,
        5.0,
    );
    assert!(matches!(result, Err(PlanError::Blocked { .. })));
    assert!(result.unwrap_err().is_recoverable());
}

// ============================================================================
// Grid pathfinder
// ============================================================================

#[test]
fn test_grid_degenerate_request() {
    let p = Point2D::new(10.0, 10.0);
    let route = find_path(p, p, &[], CLEARANCE, 5.0, 800.0).unwrap();
    assert_eq!(route.len(), 1);
    assert_eq!(route.length, 0.0);
}

#[test]
fn test_grid_enclosed_goal() {
    let goal = Point2D::new(602.5, 202.5);
    let obstacles = common::ring(goal, 40.0, 16);
    let result = find_path(Point2D::new(50.0, 50.0), goal, &obstacles, CLEARANCE, 5.0, 800.0);
    assert!(matches!(
        result,
        Err(PlanError::NotFound {
            reason: SearchFailure::NoPath,
            ..
        })
    ));
}

#[test]
fn test_grid_open_field_matches_octile_distance() {
    // 30 cells right, 80 cells up
    let route = find_path(
        Point2D::new(52.5, 52.5),
        Point2D::new(202.5, 452.5),
        &[],
        CLEARANCE,
        5.0,
        800.0,
    )
    .unwrap();
    let expected = 5.0 * (50.0 + 30.0 * std::f32::consts::SQRT_2);
    assert_relative_eq!(route.length, expected, max_relative = 1e-4);
}

#[test]
fn test_grid_routes_around_wall() {
    let obstacles = common::wall(400.0, 100.0, 700.0, 15.0);
    let route = find_path(
        Point2D::new(300.0, 400.0),
        Point2D::new(500.0, 400.0),
        &obstacles,
        CLEARANCE,
        5.0,
        800.0,
    )
    .unwrap();

    assert!(route.length > 400.0);
    for p in &route.points {
        assert!(common::is_clear(*p, &obstacles, CLEARANCE));
    }
}

// ============================================================================
// Detour walker
// ============================================================================

#[test]
fn test_detour_cannot_escape_dense_ring() {
    common::init_logging();
    // Every point between radius ~10.1 and ~49.4 of the center is within 20
    // of the ring. That band is wider than one 30-unit sidestep, so no walk
    // out of the ring keeps clearance at all of its waypoints.
    let start = Point2D::new(400.0, 400.0);
    let end = Point2D::new(600.0, 400.0);
    let obstacles = common::ring(start, 30.0, 24);

    match detour_route(start, end, &obstacles, CLEARANCE, 1.0) {
        Ok(route) => {
            assert_eq!(route.end(), Some(end));
            assert!(min_clearance(&route.points, &obstacles, CLEARANCE) < CLEARANCE);
        }
        Err(e) => assert!(matches!(e, PlanError::Failed { .. })),
    }

    let planner =
        RoutePlanner::new(PlannerConfig::default().with_fallback(FallbackStrategy::Detour));
    let result = planner.plan(start, end, &obstacles);
    assert!(
        matches!(result, Err(PlanError::Failed { .. })),
        "expected Failed, got {:?}",
        result
    );
}

// ============================================================================
// Route planner
// ============================================================================

#[test]
fn test_planner_prefers_direct() {
    common::init_logging();
    let obstacles = [Obstacle::new(300.0, 300.0)];
    let outcome = RoutePlanner::with_defaults()
        .plan(Point2D::new(100.0, 100.0), Point2D::new(200.0, 150.0), &obstacles)
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Direct);
    assert_eq!(outcome.states.len(), 3);
    assert!(outcome.min_clearance >= CLEARANCE);
}

#[test]
fn test_planner_falls_back_to_grid() {
    common::init_logging();
    let obstacles = common::wall(400.0, 200.0, 600.0, 15.0);
    let start = Point2D::new(300.0, 400.0);
    let end = Point2D::new(500.0, 400.0);

    let outcome = RoutePlanner::with_defaults().plan(start, end, &obstacles).unwrap();

    assert_eq!(outcome.strategy, Strategy::Grid);
    assert_eq!(outcome.route.start(), Some(start));
    assert_eq!(outcome.route.end(), Some(end));
    assert!(outcome.min_clearance >= CLEARANCE);
    assert!(outcome.direct_blocked_clearance.is_some());
    assert_eq!(
        outcome.states[2],
        PlanState::Fallback {
            strategy: FallbackStrategy::Grid
        }
    );
    assert!(outcome.states.last().unwrap().is_terminal());
}

#[test]
fn test_planner_detour_never_returns_unsafe_route() {
    // Two obstacles straddling the line: the walker sidesteps from the
    // first straight into the second one's radius.
    let obstacles = [Obstacle::new(200.0, 100.0), Obstacle::new(179.0, 131.0)];
    let config = PlannerConfig::default().with_fallback(FallbackStrategy::Detour);
    let result = RoutePlanner::new(config).plan(
        Point2D::new(100.0, 100.0),
        Point2D::new(300.0, 100.0),
        &obstacles,
    );

    match result {
        Ok(outcome) => {
            // Any route that comes back must be clear
            for p in &outcome.route.points {
                assert!(common::is_clear(*p, &obstacles, CLEARANCE));
            }
        }
        Err(e) => assert!(matches!(e, PlanError::Failed { .. })),
    }
}

#[test]
fn test_planner_from_yaml_config() {
    let yaml = r#"
planner:
  clearance: 10.0
  fallback: grid
grid:
  cell_size: 2.0
  extent: 200.0
  inflation_margin: 2.0
"#;
    let config = MargaConfig::from_yaml(yaml).unwrap();
    let planner = RoutePlanner::new(config.to_planner_config());

    let obstacles = [Obstacle::new(100.0, 100.0)];
    let outcome = planner
        .plan(Point2D::new(50.0, 100.0), Point2D::new(150.0, 100.0), &obstacles)
        .unwrap();
    assert_eq!(outcome.strategy, Strategy::Grid);
    assert!(outcome.min_clearance >= 10.0);

    let outside = planner.plan(Point2D::new(50.0, 100.0), Point2D::new(250.0, 100.0), &obstacles);
    assert_eq!(outside.unwrap_err().code(), "INVALID_INPUT");
}

#[test]
fn test_status_lines() {
    let planner = RoutePlanner::with_defaults();
    let ok = planner.plan(Point2D::new(100.0, 100.0), Point2D::new(350.0, 100.0), &[]);
    assert_eq!(status_line(&ok, 10.0), "Route is set. Distance: 25 meters.");

    let goal = Point2D::new(402.5, 402.5);
    let enclosed = planner.plan(Point2D::new(100.0, 100.0), goal, &common::ring(goal, 40.0, 16));
    assert!(status_line(&enclosed, 10.0).starts_with("No route exists"));
}

#[test]
fn test_custom_grid_config() {
    let config = PlannerConfig {
        grid: GridConfig::with_grid(10.0, 400.0).with_inflation_margin(8.0),
        ..Default::default()
    };
    let obstacles = [Obstacle::new(200.0, 200.0)];
    let outcome = RoutePlanner::new(config)
        .plan(Point2D::new(150.0, 200.0), Point2D::new(250.0, 200.0), &obstacles)
        .unwrap();
    assert_eq!(outcome.strategy, Strategy::Grid);
    assert!(outcome.min_clearance >= CLEARANCE);
}
