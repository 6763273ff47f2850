//! Exploration-order policies. Each solver owns exactly one of these, and each keeps its own
//! tie-breaking rule.
use crate::pathing_grid::PathingGrid;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::VecDeque;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The set of discovered but not yet expanded cells. `pop` receives the grid because some
/// policies rank entries by the scratch values stored in the cells.
pub trait Frontier {
    fn push(&mut self, point: Point);
    fn pop(&mut self, grid: &PathingGrid) -> Option<Point>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier(VecDeque<Point>);

impl Frontier for FifoFrontier {
    fn push(&mut self, point: Point) {
        self.0.push_back(point);
    }
    fn pop(&mut self, _: &PathingGrid) -> Option<Point> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out. The same cell may be pushed more than once.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier(Vec<Point>);

impl Frontier for LifoFrontier {
    fn push(&mut self, point: Point) {
        self.0.push(point);
    }
    fn pop(&mut self, _: &PathingGrid) -> Option<Point> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Which end of the distance range the Dijkstra frontier expands first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontierSelection {
    /// The entry with the largest distance; the earliest one wins ties. Since the start is
    /// seeded with [INFINITY](crate::cell::INFINITY) every label saturates and the scan
    /// degenerates to insertion order.
    #[default]
    Farthest,
    /// The entry with the smallest distance; the earliest one wins ties. Textbook Dijkstra.
    Nearest,
}

/// Unsorted list scanned linearly for the next cell by its `distance`.
#[derive(Clone, Debug, Default)]
pub struct DistanceFrontier {
    points: Vec<Point>,
    selection: FrontierSelection,
}

impl DistanceFrontier {
    pub fn new(selection: FrontierSelection) -> DistanceFrontier {
        DistanceFrontier {
            points: Vec::new(),
            selection,
        }
    }
}

impl Frontier for DistanceFrontier {
    fn push(&mut self, point: Point) {
        self.points.push(point);
    }
    fn pop(&mut self, grid: &PathingGrid) -> Option<Point> {
        let ix = match self.selection {
            FrontierSelection::Farthest => self
                .points
                .iter()
                .position_min_by_key(|p| Reverse(grid[**p].distance)),
            FrontierSelection::Nearest => {
                self.points.iter().position_min_by_key(|p| grid[**p].distance)
            }
        }?;
        Some(self.points.remove(ix))
    }
    fn len(&self) -> usize {
        self.points.len()
    }
}

/// Insertion-ordered open list ranked by `f`. Among equal f-scores the most recently inserted
/// entry is expanded first.
#[derive(Clone, Debug, Default)]
pub struct OpenList(FxIndexSet<Point>);

impl OpenList {
    pub fn contains(&self, point: &Point) -> bool {
        self.0.contains(point)
    }
}

impl Frontier for OpenList {
    fn push(&mut self, point: Point) {
        self.0.insert(point);
    }
    fn pop(&mut self, grid: &PathingGrid) -> Option<Point> {
        let ix = self
            .0
            .iter()
            .position_max_by_key(|p| Reverse(grid[**p].f))?;
        self.0.shift_remove_index(ix)
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(width: usize) -> PathingGrid {
        PathingGrid::new(width, 1)
    }

    fn p(x: i32) -> Point {
        Point::new(x, 0)
    }

    #[test]
    fn fifo_and_lifo_orders() {
        let grid = line(3);
        let mut fifo = FifoFrontier::default();
        let mut lifo = LifoFrontier::default();
        for x in 0..3 {
            fifo.push(p(x));
            lifo.push(p(x));
        }
        assert_eq!(fifo.pop(&grid), Some(p(0)));
        assert_eq!(lifo.pop(&grid), Some(p(2)));
        assert_eq!(fifo.len(), 2);
    }

    #[test]
    fn distance_selection_breaks_ties_by_first_entry() {
        let mut grid = line(4);
        for (x, d) in [(0, 2), (1, 5), (2, 5), (3, 1)] {
            grid[p(x)].distance = d;
        }
        let mut farthest = DistanceFrontier::new(FrontierSelection::Farthest);
        let mut nearest = DistanceFrontier::new(FrontierSelection::Nearest);
        for x in 0..4 {
            farthest.push(p(x));
            nearest.push(p(x));
        }
        assert_eq!(farthest.pop(&grid), Some(p(1)));
        assert_eq!(farthest.pop(&grid), Some(p(2)));
        assert_eq!(farthest.pop(&grid), Some(p(0)));
        assert_eq!(nearest.pop(&grid), Some(p(3)));
        assert_eq!(nearest.pop(&grid), Some(p(0)));
    }

    #[test]
    fn open_list_prefers_latest_minimum() {
        let mut grid = line(4);
        for (x, f) in [(0, 3), (1, 2), (2, 4), (3, 2)] {
            grid[p(x)].f = f;
        }
        let mut open = OpenList::default();
        for x in 0..4 {
            open.push(p(x));
        }
        assert!(open.contains(&p(2)));
        assert_eq!(open.pop(&grid), Some(p(3)));
        assert_eq!(open.pop(&grid), Some(p(1)));
        assert_eq!(open.pop(&grid), Some(p(0)));
        assert!(!open.contains(&p(0)));
        assert_eq!(open.len(), 1);
    }
}
