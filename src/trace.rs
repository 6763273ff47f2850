//! The animation trace a search hands to a renderer, and the path reconstruction shared by all
//! solvers.
use crate::cell::{Cell, Status};
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Visited,
    Path,
}

/// One animation step: the kind of mark and a copy of the cell as it was when the step was
/// recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub cell: Cell,
}

impl Event {
    pub fn new(kind: EventKind, cell: Cell) -> Event {
        Event { kind, cell }
    }
}

/// How a search terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The target was reached and the path was appended to the animation.
    Found,
    /// The frontier ran dry; the animation only shows the explored area.
    Unreachable,
}

/// Result of a single search. `animation` holds all [Visited](EventKind::Visited) events in
/// exploration order, followed by the [Path](EventKind::Path) events from start to target.
/// `path_length` counts the edges between start and target, and is 0 when the target was not
/// reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub path_length: usize,
    pub animation: Vec<Event>,
    pub outcome: Outcome,
}

impl Default for Trace {
    fn default() -> Trace {
        Trace {
            path_length: 0,
            animation: Vec::new(),
            outcome: Outcome::Unreachable,
        }
    }
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub(crate) fn visit(&mut self, cell: &Cell) {
        self.animation
            .push(Event::new(EventKind::Visited, cell.clone()));
    }

    /// Marks the run as successful: reconstructs the path ending in `last`, the cell right before
    /// the target, and appends it to the animation.
    pub(crate) fn found(&mut self, grid: &mut PathingGrid, last: Point) {
        let path = reconstruct_path(grid, last);
        self.path_length = path.len() + 1;
        self.animation.extend(path);
        self.outcome = Outcome::Found;
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of visit events, which is what the visualizer reports as visited vertices.
    pub fn visited_count(&self) -> usize {
        self.events(EventKind::Visited).count()
    }

    pub fn events(&self, kind: EventKind) -> impl Iterator<Item = &Event> + '_ {
        self.animation.iter().filter(move |e| e.kind == kind)
    }

    /// The cells strictly between start and target, in walking order.
    pub fn path(&self) -> Vec<Point> {
        self.events(EventKind::Path).map(|e| e.cell.point).collect()
    }

    /// Applies every event to `grid` at once, the way a renderer without animation would.
    /// Start, target and wall cells keep their status. Applying a trace twice leaves the grid as
    /// applying it once.
    pub fn apply(&self, grid: &mut PathingGrid) {
        for event in &self.animation {
            if let Some(cell) = grid.get_mut(event.cell.point) {
                if matches!(cell.status, Status::Start | Status::Target | Status::Wall) {
                    continue;
                }
                cell.status = match event.kind {
                    EventKind::Visited => Status::Visited,
                    EventKind::Path => Status::Path,
                };
            }
        }
    }
}

/// Follows parent back-references from `from` until the start cell is reached, marking each
/// cell on the way as [Path](Status::Path). The start itself is not part of the result. Events
/// are returned in start to target order.
pub fn reconstruct_path(grid: &mut PathingGrid, from: Point) -> Vec<Event> {
    // A parent chain never revisits a cell, so it cannot be longer than the grid
    let limit = grid.cells().len();
    let mut path = Vec::new();
    let mut current = Some(from);
    while let Some(point) = current {
        if path.len() >= limit {
            break;
        }
        let cell = match grid.get_mut(point) {
            Some(cell) if !cell.is_start() => cell,
            _ => break,
        };
        cell.status = Status::Path;
        path.push(Event::new(EventKind::Path, cell.clone()));
        current = cell.parent;
    }
    path.reverse();
    path
}
