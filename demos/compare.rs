use grid_search_trace::{Algorithm, PathingGrid};

// In this example all four algorithms search the same 10x7 grid
//
// - # marks an obstacle
// - S marks the start
// - T marks the target
//
// and the resulting traces are applied to copies of the grid, where
// v marks a visited cell and * a cell on the path.
//
// An algorithm name can be passed as argument to run only that one.

const GRID: &str = "
S...#.....
.##.#.###.
.#..#...#.
.#.####.#.
.#......#.
.######.#.
......#.#T
";

fn main() {
    let grid: PathingGrid = GRID.parse().unwrap();
    println!("{}", grid);
    let start = grid.start().unwrap();
    let target = grid.target().unwrap();

    let algorithms = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Algorithm>().unwrap()],
        None => Algorithm::ALL.to_vec(),
    };
    for algorithm in algorithms {
        let trace = algorithm.solve(&grid, start, target).unwrap();
        println!(
            "{}: visited {} vertices. Path length {}.",
            algorithm,
            trace.visited_count(),
            trace.path_length
        );
        let mut display = grid.clone();
        trace.apply(&mut display);
        println!("{}", display);
    }
}
