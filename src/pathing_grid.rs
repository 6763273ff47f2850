use crate::cell::{Cell, Status};
use crate::{GridError, Result};
use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Column and row delta of a single orthogonal step.
pub type Offset = (i32, i32);

/// The order in which a solver probes the four orthogonal neighbours. The order decides how ties
/// between equally good cells are broken and therefore shapes the animation.
pub type NeighborOrder = [Offset; 4];

/// Row below, row above, left, right.
pub const BFS_ORDER: NeighborOrder = [(0, 1), (0, -1), (-1, 0), (1, 0)];
/// Right, row below, left, row above.
pub const DFS_ORDER: NeighborOrder = [(1, 0), (0, 1), (-1, 0), (0, -1)];
/// Row above, row below, left, right.
pub const DIJKSTRA_ORDER: NeighborOrder = [(0, -1), (0, 1), (-1, 0), (1, 0)];
pub const ASTAR_ORDER: NeighborOrder = DIJKSTRA_ORDER;

/// [PathingGrid] stores the [Cell]s of a rectangular grid in row-major order. Next to the cells it
/// maintains information about connected components using a [UnionFind] structure, which
/// answers reachability queries without running a search.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            width: 0,
            height: 0,
            cells: Vec::new(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Creates a grid of unvisited cells. Cell ids are assigned row by row starting at 1.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        let cells = (0..width * height)
            .map(|ix| {
                let point = Point::new((ix % width) as i32, (ix / width) as i32);
                Cell::new(ix + 1, point, Status::Unvisited)
            })
            .collect();
        let mut grid = PathingGrid {
            width,
            height,
            cells,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn get_ix(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.get_ix(point).map(|ix| &self.cells[ix])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.get_ix(point).map(move |ix| &mut self.cells[ix])
    }

    /// The in-bounds orthogonal neighbours of `point`, in the given probing order.
    pub fn neighbors4(&self, point: Point, order: &NeighborOrder) -> SmallVec<[Point; 4]> {
        order
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    /// Position of the first cell with the given status, scanning row by row.
    pub fn find(&self, status: Status) -> Option<Point> {
        self.cells
            .iter()
            .find(|cell| cell.status == status)
            .map(|cell| cell.point)
    }

    pub fn count(&self, status: Status) -> usize {
        self.cells.iter().filter(|cell| cell.status == status).count()
    }

    pub fn start(&self) -> Option<Point> {
        self.find(Status::Start)
    }

    pub fn target(&self) -> Option<Point> {
        self.find(Status::Target)
    }

    /// Writes a status and keeps the components consistent with the new occupancy.
    fn write_status(&mut self, point: Point, status: Status) {
        let Some(ix) = self.get_ix(point) else {
            return;
        };
        let was_blocked = self.cells[ix].is_wall();
        let blocked = status == Status::Wall;
        if !was_blocked && blocked {
            // A new wall may split a component, which union-find cannot undo
            self.components_dirty = true;
        } else if was_blocked && !blocked {
            for n in self.neighbors4(point, &BFS_ORDER) {
                if let Some(n_ix) = self.get_ix(n) {
                    if !self.cells[n_ix].is_wall() {
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
        self.cells[ix].status = status;
    }

    /// Toggles a wall on an unvisited cell or clears one. Start and target cells are left
    /// untouched, in which case `false` is returned.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> bool {
        match self.get(point).map(|cell| cell.status) {
            Some(Status::Start) | Some(Status::Target) | None => false,
            Some(_) => {
                let status = if blocked {
                    Status::Wall
                } else {
                    Status::Unvisited
                };
                self.write_status(point, status);
                true
            }
        }
    }

    /// Moves the start to `point`, turning the previous start cell back into an unvisited one.
    /// Refuses to place the start on top of the target.
    pub fn set_start(&mut self, point: Point) -> bool {
        self.relocate(point, Status::Start, Status::Target)
    }

    /// Moves the target to `point`, turning the previous target cell back into an unvisited one.
    /// Refuses to place the target on top of the start.
    pub fn set_target(&mut self, point: Point) -> bool {
        self.relocate(point, Status::Target, Status::Start)
    }

    fn relocate(&mut self, point: Point, status: Status, other: Status) -> bool {
        match self.get(point) {
            Some(cell) if cell.status != other => {
                let previous: Vec<Point> = self
                    .cells
                    .iter()
                    .filter(|cell| cell.status == status)
                    .map(|cell| cell.point)
                    .collect();
                for p in previous {
                    self.write_status(p, Status::Unvisited);
                }
                self.write_status(point, status);
                true
            }
            _ => false,
        }
    }

    /// Resets every cell to its editor state, dropping the marks and scratch values of a search.
    pub fn clear_search(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// An independent copy with all search state cleared. Solvers run on a snapshot so the grid
    /// the caller keeps editing is never touched.
    pub fn snapshot(&self) -> PathingGrid {
        let mut copy = self.clone();
        copy.clear_search();
        copy
    }

    /// Checks that a search can start: both points lie on the grid, carry the start and target
    /// status respectively, and neither status occurs more than once.
    pub fn validate(&self, start: Point, target: Point) -> Result<()> {
        for p in [start, target] {
            if !self.in_bounds(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if !self[start].is_start() {
            return Err(GridError::NotStart(start));
        }
        if !self[target].is_target() {
            return Err(GridError::NotTarget(target));
        }
        let starts = self.count(Status::Start);
        if starts != 1 {
            return Err(GridError::StartCount(starts));
        }
        let targets = self.count(Status::Target);
        if targets != 1 {
            return Err(GridError::TargetCount(targets));
        }
        Ok(())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix(*point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix(*start), self.get_ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                if self.components.equiv(start_ix, goal_ix) {
                    false
                } else {
                    info!("{} and {} are not equivalent components", start, goal);
                    true
                }
            }
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Walls form singleton components.
    pub fn generate_components(&mut self) {
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h {
            for x in 0..w {
                let ix = y * w + x;
                if self.cells[ix].is_wall() {
                    continue;
                }
                if x + 1 < w && !self.cells[ix + 1].is_wall() {
                    self.components.union(ix, ix + 1);
                }
                if y + 1 < h && !self.cells[ix + w].is_wall() {
                    self.components.union(ix, ix + w);
                }
            }
        }
    }
}

impl Index<Point> for PathingGrid {
    type Output = Cell;

    /// Panics if `point` lies outside the grid.
    fn index(&self, point: Point) -> &Cell {
        match self.get_ix(point) {
            Some(ix) => &self.cells[ix],
            None => panic!("{} lies outside the {}x{} grid", point, self.width, self.height),
        }
    }
}

impl IndexMut<Point> for PathingGrid {
    fn index_mut(&mut self, point: Point) -> &mut Cell {
        match self.get_ix(point) {
            Some(ix) => &mut self.cells[ix],
            None => panic!("{} lies outside the {}x{} grid", point, self.width, self.height),
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|cell| cell.status.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the format written by [Display](fmt::Display): one line per row, row 0 first, see
/// [Status::glyph] for the characters. Surrounding whitespace and blank lines are ignored.
impl FromStr for PathingGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<PathingGrid> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(GridError::Parse("grid has no rows".to_owned())),
        };
        let mut grid = PathingGrid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let status = Status::from_glyph(glyph)
                    .ok_or_else(|| GridError::Parse(format!("unknown cell '{}'", glyph)))?;
                grid.cells[y * width + x].status = status;
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let mut grid = PathingGrid::new(3, 2);
        grid.set_wall(Point::new(1, 0), true);
        grid.set_wall(Point::new(1, 1), true);
        grid.update();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(grid.unreachable(&p1, &p2));
        assert!(grid.reachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &p4));
    }

    /// Removing a wall joins the components on both sides without a full regeneration.
    #[test]
    fn clearing_wall_joins_components() {
        let mut grid: PathingGrid = ".#.".parse().unwrap();
        let left = Point::new(0, 0);
        let right = Point::new(2, 0);
        assert!(grid.unreachable(&left, &right));
        grid.set_wall(Point::new(1, 0), false);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&left, &right));
    }

    #[test]
    fn neighbors_follow_order_and_bounds() {
        let grid = PathingGrid::new(3, 3);
        let corner = Point::new(0, 0);
        assert_eq!(
            grid.neighbors4(corner, &BFS_ORDER).as_slice(),
            &[Point::new(0, 1), Point::new(1, 0)]
        );
        let center = Point::new(1, 1);
        assert_eq!(
            grid.neighbors4(center, &DFS_ORDER).as_slice(),
            &[
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(1, 0)
            ]
        );
        assert_eq!(
            grid.neighbors4(center, &DIJKSTRA_ORDER).as_slice(),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn ids_are_row_major() {
        let grid = PathingGrid::new(4, 2);
        assert_eq!(grid[Point::new(0, 0)].id, 1);
        assert_eq!(grid[Point::new(3, 0)].id, 4);
        assert_eq!(grid[Point::new(0, 1)].id, 5);
    }

    #[test]
    fn relocating_start_clears_previous() {
        let mut grid: PathingGrid = "S..\n..T".parse().unwrap();
        assert!(grid.set_start(Point::new(1, 0)));
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert!(grid[Point::new(0, 0)].is_unvisited());
        assert!(!grid.set_start(Point::new(2, 1)));
        assert!(!grid.set_target(Point::new(1, 0)));
        assert!(grid.set_target(Point::new(0, 1)));
        assert_eq!(grid.count(Status::Target), 1);
    }

    #[test]
    fn walls_cannot_replace_endpoints() {
        let mut grid: PathingGrid = "S.T".parse().unwrap();
        assert!(!grid.set_wall(Point::new(0, 0), true));
        assert!(grid.set_wall(Point::new(1, 0), true));
        assert!(grid.components_dirty);
        assert!(!grid.set_wall(Point::new(5, 0), true));
    }

    #[test]
    fn snapshot_clears_search_state() {
        let mut grid: PathingGrid = "Svf\n*#T".parse().unwrap();
        grid[Point::new(1, 0)].parent = Some(Point::new(0, 0));
        let copy = grid.snapshot();
        assert_eq!(copy.to_string(), "S..\n.#T\n");
        assert_eq!(copy[Point::new(1, 0)].parent, None);
        // The source grid keeps its marks
        assert_eq!(grid.to_string(), "Svf\n*#T\n");
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert!(matches!("S.\n.".parse::<PathingGrid>(), Err(GridError::Parse(_))));
        assert!(matches!("S?".parse::<PathingGrid>(), Err(GridError::Parse(_))));
        assert!(matches!("\n\n".parse::<PathingGrid>(), Err(GridError::Parse(_))));
    }

    #[test]
    fn validate_reports_configuration_errors() {
        let grid: PathingGrid = "S.T".parse().unwrap();
        let start = Point::new(0, 0);
        let target = Point::new(2, 0);
        assert!(grid.validate(start, target).is_ok());
        assert!(matches!(
            grid.validate(Point::new(3, 0), target),
            Err(GridError::OutOfBounds(_))
        ));
        assert!(matches!(
            grid.validate(Point::new(1, 0), target),
            Err(GridError::NotStart(_))
        ));
        assert!(matches!(
            grid.validate(start, start),
            Err(GridError::NotTarget(_))
        ));
        let twice: PathingGrid = "S.T\nS..".parse().unwrap();
        assert!(matches!(
            twice.validate(start, target),
            Err(GridError::StartCount(2))
        ));
    }
}
