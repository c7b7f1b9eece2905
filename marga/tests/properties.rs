//! Property tests over randomized obstacle fields.
//!
//! Fields mimic the interactive demo: twenty obstacles scattered over the
//! plane, with start and end points dropped anywhere on the grid.

mod common;

use marga::core::distance;
use marga::{
    FallbackStrategy, Obstacle, PlanError, PlannerConfig, Point2D, RoutePlanner, SearchFailure,
    Strategy, min_clearance,
};
use rand::prelude::*;

use common::CLEARANCE;

const FIELDS: u64 = 40;
const OBSTACLES: usize = 20;

fn random_request(seed: u64) -> (Point2D, Point2D, Vec<Obstacle>) {
    let obstacles = common::random_field(OBSTACLES, 50.0, 750.0, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1_000));
    let start = common::random_point(&mut rng, 0.0, 800.0);
    let end = common::random_point(&mut rng, 0.0, 800.0);
    (start, end, obstacles)
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = common::random_point(&mut rng, -1000.0, 1000.0);
        let b = common::random_point(&mut rng, -1000.0, 1000.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }
}

#[test]
fn test_grid_routes_keep_clearance() {
    common::init_logging();
    let planner = RoutePlanner::with_defaults();

    let mut found = 0;
    for seed in 0..FIELDS {
        let (start, end, obstacles) = random_request(seed);
        match planner.plan(start, end, &obstacles) {
            Ok(outcome) => {
                found += 1;
                assert!(
                    min_clearance(&outcome.route.points, &obstacles, CLEARANCE) >= CLEARANCE,
                    "seed {}: route violates clearance",
                    seed
                );
                assert_eq!(outcome.route.start(), Some(start));
                assert_eq!(outcome.route.end(), Some(end));
                assert!(outcome.route.length + 1e-3 >= distance(start, end));
            }
            Err(PlanError::NotFound { reason, .. }) => {
                // Endpoints dropped on top of an obstacle are expected
                assert!(
                    matches!(
                        reason,
                        SearchFailure::StartBlocked
                            | SearchFailure::GoalBlocked
                            | SearchFailure::NoPath
                    ),
                    "seed {}: unexpected {:?}",
                    seed,
                    reason
                );
            }
            Err(e) => panic!("seed {}: unexpected error {}", seed, e),
        }
    }
    assert!(found > FIELDS as usize / 2, "only {} of {} fields routed", found, FIELDS);
}

#[test]
fn test_direct_routes_are_straight() {
    let planner = RoutePlanner::with_defaults();
    for seed in 0..FIELDS {
        let (start, end, obstacles) = random_request(seed);
        if let Ok(outcome) = planner.plan(start, end, &obstacles) {
            if outcome.strategy == Strategy::Direct {
                let straight = distance(start, end);
                assert!((outcome.route.length - straight).abs() < 0.05);
                assert_eq!(outcome.direct_blocked_clearance, None);
            } else {
                assert!(outcome.direct_blocked_clearance.unwrap() < CLEARANCE);
            }
        }
    }
}

#[test]
fn test_detour_always_terminates() {
    let config = PlannerConfig::default().with_fallback(FallbackStrategy::Detour);
    let planner = RoutePlanner::new(config);

    for seed in 0..FIELDS {
        let (start, end, obstacles) = random_request(seed);
        match planner.plan(start, end, &obstacles) {
            Ok(outcome) => {
                assert!(min_clearance(&outcome.route.points, &obstacles, CLEARANCE) >= CLEARANCE);
                assert_eq!(outcome.route.end(), Some(end));
            }
            Err(e) => assert!(
                matches!(e, PlanError::Failed { .. }),
                "seed {}: unexpected error {}",
                seed,
                e
            ),
        }
    }
}

#[test]
fn test_dense_field_detour_terminates() {
    // Far denser than the demo: the walker bounces around a lot but the
    // step budget ends every walk.
    let obstacles = common::random_field(150, 100.0, 700.0, 99);
    let config = PlannerConfig::default().with_fallback(FallbackStrategy::Detour);
    let planner = RoutePlanner::new(config);

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..5 {
        let start = common::random_point(&mut rng, 0.0, 800.0);
        let end = common::random_point(&mut rng, 0.0, 800.0);
        let result = planner.plan(start, end, &obstacles);
        assert!(!matches!(result, Err(PlanError::InvalidInput(_))));
    }
}

#[test]
fn test_concurrent_requests_match_sequential() {
    let planner = RoutePlanner::with_defaults();
    let requests: Vec<_> = (0..8).map(random_request).collect();

    let sequential: Vec<_> = requests
        .iter()
        .map(|(s, e, o)| planner.plan(*s, *e, o).map(|out| out.route))
        .collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|(s, e, o)| {
                let planner = &planner;
                scope.spawn(move || planner.plan(*s, *e, o).map(|out| out.route))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("planner thread panicked"))
            .collect()
    });

    assert_eq!(sequential, concurrent);
}
