//! Test utilities for Marga planning tests.
//!
//! Obstacle layouts and request generators shared by the integration tests.

#![allow(dead_code)]

use marga::{Obstacle, Point2D};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Clearance radius used throughout the tests.
pub const CLEARANCE: f32 = 20.0;

/// Obstacles evenly spaced on a circle.
pub fn ring(center: Point2D, radius: f32, count: usize) -> Vec<Obstacle> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            Obstacle::from(center + Point2D::new(angle.cos(), angle.sin()) * radius)
        })
        .collect()
}

/// Vertical wall of obstacles at `x` from `y_from` to `y_to`.
pub fn wall(x: f32, y_from: f32, y_to: f32, spacing: f32) -> Vec<Obstacle> {
    let count = ((y_to - y_from) / spacing).floor() as usize;
    (0..=count)
        .map(|i| Obstacle::new(x, y_from + i as f32 * spacing))
        .collect()
}

/// Random obstacle field, like the interactive demo places them.
///
/// Centers are uniform in `[min, max)` on both axes.
pub fn random_field(count: usize, min: f32, max: f32, seed: u64) -> Vec<Obstacle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Obstacle::new(rng.random_range(min..max), rng.random_range(min..max)))
        .collect()
}

/// Random point in `[min, max)²`.
pub fn random_point(rng: &mut StdRng, min: f32, max: f32) -> Point2D {
    Point2D::new(rng.random_range(min..max), rng.random_range(min..max))
}

/// Is `point` at least `clearance` from every obstacle?
pub fn is_clear(point: Point2D, obstacles: &[Obstacle], clearance: f32) -> bool {
    obstacles.iter().all(|o| o.distance_to(&point) >= clearance)
}

/// Install the test logger once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
