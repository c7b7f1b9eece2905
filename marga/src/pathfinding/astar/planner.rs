//! A* planner implementation.

use crate::core::{GridCoord, Point2D};
use crate::error::{PlanError, Result, SearchFailure, require_finite};
use crate::route::Route;
use log::{debug, trace};
use std::collections::BinaryHeap;

use super::grid::{ObstacleGrid, require_inside};
use super::types::{FrontierEntry, GridPath, SearchNode};

/// A* pathfinder over a prebuilt obstacle grid
pub struct AStarPlanner<'a> {
    grid: &'a ObstacleGrid,
    max_iterations: usize,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a ObstacleGrid, max_iterations: usize) -> Self {
        Self {
            grid,
            max_iterations,
        }
    }

    /// Create with the default iteration cap
    pub fn with_defaults(grid: &'a ObstacleGrid) -> Self {
        Self::new(grid, super::GridConfig::default().max_iterations)
    }

    /// Find a path from start to goal (cell coordinates)
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<GridPath> {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        if self.grid.is_blocked(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return Err(not_found(SearchFailure::StartBlocked, 0));
        }
        if self.grid.is_blocked(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return Err(not_found(SearchFailure::GoalBlocked, 0));
        }

        if start == goal {
            return Ok(GridPath {
                cells: vec![start],
                route: Route::single(self.grid.cell_center(start)),
                cost: 0.0,
                nodes_expanded: 0,
            });
        }

        let cell_count = self.grid.cell_count();
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut best_g = vec![f32::INFINITY; cell_count];
        let mut closed = vec![false; cell_count];
        let mut open_set = BinaryHeap::new();
        let mut seq: u64 = 0;

        let h_start = self.heuristic(start, goal);
        nodes.push(SearchNode {
            coord: start,
            g_cost: 0.0,
            parent: None,
        });
        best_g[self.grid.index(start)] = 0.0;
        open_set.push(FrontierEntry {
            f_cost: h_start,
            h_cost: h_start,
            seq,
            node: 0,
        });

        let axis_cost = self.grid.cell_size();
        let diagonal_cost = axis_cost * std::f32::consts::SQRT_2;
        let mut nodes_expanded = 0;

        while let Some(entry) = open_set.pop() {
            let current = nodes[entry.node].clone();
            let current_idx = self.grid.index(current.coord);

            // Stale entry superseded by a cheaper one
            if closed[current_idx] {
                continue;
            }
            closed[current_idx] = true;
            nodes_expanded += 1;

            if nodes_expanded > self.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return Err(not_found(
                    SearchFailure::MaxIterationsExceeded,
                    nodes_expanded,
                ));
            }

            // Goal reached
            if current.coord == goal {
                return Ok(self.reconstruct_path(&nodes, entry.node, nodes_expanded));
            }

            for (i, neighbor) in current.coord.neighbors_8().iter().enumerate() {
                if self.grid.is_blocked(*neighbor) {
                    continue;
                }
                let neighbor_idx = self.grid.index(*neighbor);
                if closed[neighbor_idx] {
                    continue;
                }

                let move_cost = if i >= 4 { diagonal_cost } else { axis_cost };
                let tentative_g = current.g_cost + move_cost;

                if tentative_g < best_g[neighbor_idx] {
                    best_g[neighbor_idx] = tentative_g;
                    nodes.push(SearchNode {
                        coord: *neighbor,
                        g_cost: tentative_g,
                        parent: Some(entry.node),
                    });

                    let h = self.heuristic(*neighbor, goal);
                    seq += 1;
                    open_set.push(FrontierEntry {
                        f_cost: tentative_g + h,
                        h_cost: h,
                        seq,
                        node: nodes.len() - 1,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        Err(not_found(SearchFailure::NoPath, nodes_expanded))
    }

    /// Find a path between two plane points.
    ///
    /// Both points must lie inside the grid; they map to the cells that
    /// contain them and the returned route runs between those cell centers.
    pub fn find_path_world(&self, start: Point2D, goal: Point2D) -> Result<GridPath> {
        require_finite("start", start)?;
        require_finite("end", goal)?;
        require_inside("start", start, self.grid.extent())?;
        require_inside("end", goal, self.grid.extent())?;

        self.find_path(self.grid.point_to_cell(start), self.grid.point_to_cell(goal))
    }

    /// Euclidean distance between cell centers, in plane units
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> f32 {
        from.euclidean_distance(&to) * self.grid.cell_size()
    }

    /// Follow parent indices back from the goal node
    fn reconstruct_path(&self, nodes: &[SearchNode], goal_node: usize, nodes_expanded: usize) -> GridPath {
        let mut cells = Vec::new();
        let mut current = Some(goal_node);

        while let Some(idx) = current {
            cells.push(nodes[idx].coord);
            current = nodes[idx].parent;
        }
        cells.reverse();

        let cost = nodes[goal_node].g_cost;
        let route = Route::new(cells.iter().map(|c| self.grid.cell_center(*c)).collect());

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            cells.len(),
            cost,
            nodes_expanded
        );

        GridPath {
            cells,
            route,
            cost,
            nodes_expanded,
        }
    }
}

fn not_found(reason: SearchFailure, nodes_expanded: usize) -> PlanError {
    PlanError::NotFound {
        reason,
        nodes_expanded,
    }
}
