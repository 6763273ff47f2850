use crate::cell::Status;
use crate::frontier::{DistanceFrontier, Frontier, FrontierSelection};
use crate::pathing_grid::{PathingGrid, DIJKSTRA_ORDER};
use crate::solver::GridSolver;
use crate::trace::Trace;
use grid_util::point::Point;

/// Dijkstra's algorithm on the unit-cost grid, with a linearly scanned frontier.
///
/// With the default [FrontierSelection::Farthest] the start keeps its unassigned
/// [INFINITY](crate::cell::INFINITY) distance, every label saturates and cells are expanded in
/// discovery order. [FrontierSelection::Nearest] seeds the start with 0 and expands the closest
/// cell first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver {
    pub selection: FrontierSelection,
}

impl DijkstraSolver {
    pub fn new(selection: FrontierSelection) -> DijkstraSolver {
        DijkstraSolver { selection }
    }
}

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, _target: Point, trace: &mut Trace) {
        if self.selection == FrontierSelection::Nearest {
            grid[start].distance = 0;
        }
        let mut frontier = DistanceFrontier::new(self.selection);
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
            let distance = cell.distance.saturating_add(1);
            for n in grid.neighbors4(current, &DIJKSTRA_ORDER) {
                if grid[n].is_target() {
                    trace.found(grid, current);
                    return;
                }
                let neighbor = &mut grid[n];
                if neighbor.is_unvisited() {
                    neighbor.status = Status::Frontier;
                    neighbor.parent = Some(current);
                    neighbor.distance = distance;
                    frontier.push(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::INFINITY;
    use crate::trace::{EventKind, Outcome};

    fn visited(trace: &Trace) -> Vec<Point> {
        trace
            .events(EventKind::Visited)
            .map(|e| e.cell.point)
            .collect()
    }

    #[test]
    fn farthest_selection_expands_in_discovery_order() {
        let grid: PathingGrid = "S..\n...\n..T".parse().unwrap();
        let trace = DijkstraSolver::default().solve_grid(&grid).unwrap();
        assert_eq!(
            visited(&trace),
            vec![
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(0, 2),
                Point::new(1, 1),
                Point::new(2, 0),
                Point::new(1, 2)
            ]
        );
        assert_eq!(trace.path_length, 4);
        assert!(trace
            .events(EventKind::Visited)
            .all(|e| e.cell.distance == INFINITY));
    }

    #[test]
    fn nearest_selection_labels_distances() {
        let grid: PathingGrid = "S...\n.#..\n...T".parse().unwrap();
        let nearest = DijkstraSolver::new(FrontierSelection::Nearest)
            .solve_grid(&grid)
            .unwrap();
        let farthest = DijkstraSolver::default().solve_grid(&grid).unwrap();
        assert_eq!(nearest.path_length, 5);
        for event in nearest.events(EventKind::Visited) {
            let p = event.cell.point;
            // No detour is needed to reach any cell on this grid
            assert_eq!(event.cell.distance, (p.x + p.y) as u32);
        }
        assert_eq!(visited(&nearest), visited(&farthest));
    }

    #[test]
    fn walled_off_start() {
        let grid: PathingGrid = "S#.\n#..\n..T".parse().unwrap();
        for selection in [FrontierSelection::Farthest, FrontierSelection::Nearest] {
            let trace = DijkstraSolver::new(selection).solve_grid(&grid).unwrap();
            assert_eq!(trace.outcome, Outcome::Unreachable);
            assert!(trace.animation.is_empty());
        }
    }
}
