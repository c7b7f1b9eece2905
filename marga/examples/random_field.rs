//! Plan a route across a random obstacle field.
//!
//! Scatters obstacles over the plane, plans between two points and prints
//! the status line a display layer would show, followed by the waypoints.
//!
//! Usage:
//!   cargo run --example random_field
//!   cargo run --example random_field -- --start 50,50 --end 700,600 --seed 7
//!   RUST_LOG=debug cargo run --example random_field -- --config configs/marga.yaml

use clap::Parser;
use rand::prelude::*;
use std::path::Path;

use marga::{MargaConfig, Obstacle, Point2D, RoutePlanner, status_line};

/// Random obstacle field planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/marga.yaml")]
    config: String,

    /// Number of obstacles to scatter
    #[arg(short = 'n', long, default_value_t = 20)]
    obstacles: usize,

    /// Random seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start point as "x,y" (random if omitted)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point2D>,

    /// End point as "x,y" (random if omitted)
    #[arg(long, value_parser = parse_point)]
    end: Option<Point2D>,

    /// Print every waypoint
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{}\"", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {}", e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {}", e))?;
    Ok(Point2D::new(x, y))
}

/// Scatter obstacles the way the interactive planner does: 700 x 650 units.
fn scatter_obstacles(rng: &mut StdRng, count: usize) -> Vec<Obstacle> {
    (0..count)
        .map(|_| Obstacle::new(rng.random_range(0.0..700.0), rng.random_range(0.0..650.0)))
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match MargaConfig::load(Path::new(&args.config)) {
        Ok(config) => {
            log::info!("Loaded config from {}", args.config);
            config
        }
        Err(e) => {
            log::warn!("Using default config ({})", e);
            MargaConfig::default()
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!("Seed: {}", seed);

    let obstacles = scatter_obstacles(&mut rng, args.obstacles);
    let extent = config.grid.extent;
    let start = args
        .start
        .unwrap_or_else(|| Point2D::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)));
    let end = args
        .end
        .unwrap_or_else(|| Point2D::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)));

    log::info!(
        "Planning ({:.1}, {:.1}) -> ({:.1}, {:.1}) around {} obstacles",
        start.x,
        start.y,
        end.x,
        end.y,
        obstacles.len()
    );

    let planner = RoutePlanner::new(config.to_planner_config());
    let result = planner.plan(start, end, &obstacles);

    println!("{}", status_line(&result, config.units_per_meter()));

    match &result {
        Ok(outcome) => {
            println!(
                "Strategy: {:?}, waypoints: {}, length: {:.1}, min clearance: {:.1}",
                outcome.strategy,
                outcome.route.len(),
                outcome.route.length,
                outcome.min_clearance
            );
            let states: Vec<String> = outcome.states.iter().map(|s| s.to_string()).collect();
            println!("States: {}", states.join(" -> "));

            if args.verbose {
                for (i, p) in outcome.route.points.iter().enumerate() {
                    println!("  {:4}: ({:7.2}, {:7.2})", i, p.x, p.y);
                }
            }
        }
        Err(e) => {
            println!("Reason [{}]: {}", e.code(), e);
        }
    }
}
