use crate::pathing_grid::PathingGrid;
use crate::trace::Trace;
use crate::{GridError, Result};
use grid_util::point::Point;
use log::{debug, info, warn};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// A search that explores a grid from the start cell until it meets the target or runs out of
/// cells, recording its progress as a [Trace].
pub trait GridSolver {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// The algorithm itself. `grid` is a snapshot owned by this run and may be marked freely;
    /// `start` and `target` have been validated against it.
    fn search(&self, grid: &mut PathingGrid, start: Point, target: Point, trace: &mut Trace);

    /// Validates the input, runs [search](Self::search) on a snapshot of `grid` and returns the
    /// recorded trace. `grid` itself is left untouched.
    fn solve(&self, grid: &PathingGrid, start: Point, target: Point) -> Result<Trace> {
        if let Err(err) = grid.validate(start, target) {
            warn!("{}: refusing to search: {}", self.name(), err);
            return Err(err);
        }
        let mut snapshot = grid.snapshot();
        let mut trace = Trace::new();
        debug!("{}: searching from {} to {}", self.name(), start, target);
        self.search(&mut snapshot, start, target, &mut trace);
        info!(
            "{}: {:?} after {} visits, path length {}",
            self.name(),
            trace.outcome,
            trace.visited_count(),
            trace.path_length
        );
        Ok(trace)
    }

    /// Like [solve](Self::solve), but locates the start and target cells on the grid first.
    fn solve_grid(&self, grid: &PathingGrid) -> Result<Trace> {
        let start = grid.start().ok_or(GridError::StartCount(0))?;
        let target = grid.target().ok_or(GridError::TargetCount(0))?;
        self.solve(grid, start, target)
    }
}

/// Checks that `path` leads from `start` to `target` in orthogonal steps over open cells. The
/// path excludes both endpoints, as in [Trace::path].
pub fn is_valid_path(grid: &PathingGrid, start: Point, target: Point, path: &[Point]) -> bool {
    let mut previous = start;
    for &point in path.iter().chain(std::iter::once(&target)) {
        let step = (point.x - previous.x).abs() + (point.y - previous.y).abs();
        let open = grid.get(point).map_or(false, |cell| !cell.is_wall());
        if step != 1 || !open {
            return false;
        }
        previous = point;
    }
    true
}
