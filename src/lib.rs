//! # grid_search_trace
//!
//! The engine behind a grid pathfinding visualizer. Four classical searches,
//! [breadth-first search](solver::bfs), [depth-first search](solver::dfs),
//! [Dijkstra's algorithm](solver::dijkstra) and [A*](solver::astar), explore a
//! [PathingGrid] and record every step they take as a [Trace]: an ordered list of
//! visited cells followed by the reconstructed path, ready to be replayed by a renderer.
//!
//! Every search runs on a private [snapshot](PathingGrid::snapshot) of the grid, so the grid a
//! user keeps editing is never touched. Runs are deterministic: the same grid, start and target
//! always yield the same trace, with ties broken by the fixed neighbour order of each
//! algorithm.
//!
//! ```
//! use grid_search_trace::{Algorithm, PathingGrid};
//!
//! let grid: PathingGrid = "S..\n.#.\n..T".parse().unwrap();
//! let (start, target) = (grid.start().unwrap(), grid.target().unwrap());
//! let trace = Algorithm::Bfs.solve(&grid, start, target).unwrap();
//! assert_eq!(trace.path_length, 4);
//! ```
pub mod cell;
pub mod frontier;
pub mod pathing_grid;
pub mod solver;
pub mod trace;

pub use cell::{Cell, Status};
pub use pathing_grid::PathingGrid;
pub use frontier::FrontierSelection;
pub use solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, GridSolver,
};
pub use trace::{Event, EventKind, Outcome, Trace};

use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;

/// Reasons a grid cannot be searched. Raised before any search work is done.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("{0} is not the start cell")]
    NotStart(Point),

    #[error("{0} is not the target cell")]
    NotTarget(Point),

    #[error("expected exactly one start cell, found {0}")]
    StartCount(usize),

    #[error("expected exactly one target cell, found {0}")]
    TargetCount(usize),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("malformed grid: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// The algorithms a user can pick from, named as the visualizer presents them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Runs the algorithm with its default solver settings.
    pub fn solve(self, grid: &PathingGrid, start: Point, target: Point) -> Result<Trace> {
        match self {
            Algorithm::Bfs => BfsSolver.solve(grid, start, target),
            Algorithm::Dfs => DfsSolver.solve(grid, start, target),
            Algorithm::Dijkstra => DijkstraSolver::default().solve(grid, start, target),
            Algorithm::AStar => AstarSolver::new().solve(grid, start, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display names as well as short lowercase aliases.
impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Algorithm> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first search" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first search" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "a* search" | "astar" => Ok(Algorithm::AStar),
            _ => Err(GridError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
