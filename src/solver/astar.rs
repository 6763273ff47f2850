use crate::cell::Status;
use crate::frontier::{Frontier, OpenList};
use crate::pathing_grid::{PathingGrid, ASTAR_ORDER};
use crate::solver::GridSolver;
use crate::trace::Trace;
use grid_util::point::Point;

/// A* search guided by the Manhattan distance to the target.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Manhattan distance times the heuristic factor. With a factor above 1.0 the estimate is no
    /// longer admissible and the path found may be longer than necessary.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        ((delta_x + delta_y) as f32 * self.heuristic_factor) as u32
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A* Search"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, target: Point, trace: &mut Trace) {
        let start_h = self.heuristic(&start, &target);
        let cell = &mut grid[start];
        cell.g = 0;
        cell.h = start_h;
        cell.f = start_h;

        let mut open = OpenList::default();
        open.push(start);
        while let Some(current) = open.pop(grid) {
            if grid[current].is_target() {
                if let Some(parent) = grid[current].parent {
                    trace.found(grid, parent);
                }
                return;
            }
            let cell = &mut grid[current];
            if !cell.is_start() {
                cell.status = Status::Visited;
                trace.visit(cell);
            }
            let g = cell.g.saturating_add(1);
            for n in grid.neighbors4(current, &ASTAR_ORDER) {
                let in_open = open.contains(&n);
                let neighbor = &mut grid[n];
                if neighbor.is_visited() || neighbor.is_wall() {
                    continue;
                }
                // The start is never marked visited and may be opened again from a neighbour
                let best = if !in_open {
                    neighbor.h = self.heuristic(&n, &target);
                    if neighbor.is_unvisited() {
                        neighbor.status = Status::Frontier;
                    }
                    open.push(n);
                    true
                } else {
                    g < neighbor.g
                };
                if best {
                    neighbor.parent = Some(current);
                    neighbor.g = g;
                    neighbor.f = g.saturating_add(neighbor.h);
                }
            }
        }
    }
}
