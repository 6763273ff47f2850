use crate::cell::Status;
use crate::frontier::{Frontier, LifoFrontier};
use crate::pathing_grid::{PathingGrid, DFS_ORDER};
use crate::solver::GridSolver;
use crate::trace::Trace;
use grid_util::point::Point;

/// Depth-first search. Finds a path whenever one exists, but not necessarily a short one.
///
/// Discovered cells are not marked, so a cell can sit on the stack more than once; every time
/// such an entry is popped the cell is recorded as visited again.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, _target: Point, trace: &mut Trace) {
        let mut frontier = LifoFrontier::default();
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
            for n in grid.neighbors4(current, &DFS_ORDER) {
                if grid[n].is_target() {
                    trace.found(grid, current);
                    return;
                }
                let neighbor = &mut grid[n];
                if neighbor.is_unvisited() {
                    neighbor.parent = Some(current);
                    frontier.push(n);
                }
            }
        }
    }
}
