use grid_search_trace::{AstarSolver, GridSolver, PathingGrid};
use grid_util::point::Point;

// In this example the target on a 5x4 grid is walled in
//  _____
// |S    |
// |   # |
// |  #T#|
// |   # |
//  _____
// The union-find components already tell that no path exists, A* still
// explores everything it can reach and returns only visit events.

fn main() {
    let mut grid = PathingGrid::new(5, 4);
    for p in [Point::new(3, 1), Point::new(2, 2), Point::new(4, 2), Point::new(3, 3)] {
        grid.set_wall(p, true);
    }
    let start = Point::new(0, 0);
    let target = Point::new(3, 2);
    grid.set_start(start);
    grid.set_target(target);
    grid.update();
    println!("{}", grid);
    println!("Reachable: {}", grid.reachable(&start, &target));

    let trace = AstarSolver::new().solve(&grid, start, target).unwrap();
    println!("Outcome: {:?}", trace.outcome);
    for event in &trace.animation {
        println!("{:?} {}", event.kind, event.cell.point);
    }
}
