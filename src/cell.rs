use core::fmt;
use grid_util::point::Point;

/// Sentinel for a distance that has not been assigned yet.
pub const INFINITY: u32 = u32::MAX;

/// The closed set of states a [Cell] moves through. [Start](Status::Start),
/// [Target](Status::Target) and [Wall](Status::Wall) are placed by the editor, the other
/// transient states are only ever written by a search on its own snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Unvisited,
    Wall,
    Start,
    Target,
    Visited,
    Frontier,
    Path,
}

impl Status {
    /// Glyph used by the text format of [PathingGrid](crate::pathing_grid::PathingGrid).
    pub fn glyph(self) -> char {
        match self {
            Status::Unvisited => '.',
            Status::Wall => '#',
            Status::Start => 'S',
            Status::Target => 'T',
            Status::Visited => 'v',
            Status::Frontier => 'f',
            Status::Path => '*',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Status> {
        match glyph {
            '.' => Some(Status::Unvisited),
            '#' => Some(Status::Wall),
            'S' => Some(Status::Start),
            'T' => Some(Status::Target),
            'v' => Some(Status::Visited),
            'f' => Some(Status::Frontier),
            '*' => Some(Status::Path),
            _ => None,
        }
    }

    /// Whether the state only exists during (or as a result of) a search.
    pub fn is_transient(self) -> bool {
        matches!(self, Status::Visited | Status::Frontier | Status::Path)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single vertex of the grid. Besides its position and [Status], a cell carries the scratch
/// fields the solvers write: a `parent` back-reference used for path reconstruction, the
/// Dijkstra `distance` and the A* scores `g`, `h` and `f = g + h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub id: usize,
    pub point: Point,
    pub status: Status,
    pub parent: Option<Point>,
    pub distance: u32,
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

impl Cell {
    pub fn new(id: usize, point: Point, status: Status) -> Cell {
        Cell {
            id,
            point,
            status,
            parent: None,
            distance: INFINITY,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    pub fn row(&self) -> usize {
        self.point.y as usize
    }

    pub fn col(&self) -> usize {
        self.point.x as usize
    }

    pub fn is_wall(&self) -> bool {
        self.status == Status::Wall
    }
    pub fn is_start(&self) -> bool {
        self.status == Status::Start
    }
    pub fn is_target(&self) -> bool {
        self.status == Status::Target
    }
    pub fn is_unvisited(&self) -> bool {
        self.status == Status::Unvisited
    }
    pub fn is_visited(&self) -> bool {
        self.status == Status::Visited
    }

    /// Clears the scratch fields and drops any transient status.
    pub fn reset(&mut self) {
        if self.status.is_transient() {
            self.status = Status::Unvisited;
        }
        self.parent = None;
        self.distance = INFINITY;
        self.g = 0;
        self.h = 0;
        self.f = 0;
    }
}
