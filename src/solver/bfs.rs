use crate::cell::Status;
use crate::frontier::{FifoFrontier, Frontier};
use crate::pathing_grid::{PathingGrid, BFS_ORDER};
use crate::solver::GridSolver;
use crate::trace::Trace;
use grid_util::point::Point;

/// Breadth-first search. Cells are expanded layer by layer from the start, so the path found is
/// a shortest one in number of steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, _target: Point, trace: &mut Trace) {
        let mut frontier = FifoFrontier::default();
        frontier.push(start);
        while let Some(current) = frontier.pop(grid) {
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
            for n in grid.neighbors4(current, &BFS_ORDER) {
                if grid[n].is_target() {
                    trace.found(grid, current);
                    return;
                }
                let neighbor = &mut grid[n];
                if neighbor.is_unvisited() {
                    neighbor.status = Status::Frontier;
                    neighbor.parent = Some(current);
                    frontier.push(n);
                }
            }
        }
    }
}
