use criterion::{criterion_group, criterion_main, Criterion};
use grid_search_trace::{Algorithm, PathingGrid};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Grid the size the visualizer typically shows, with roughly a quarter of the cells walled off.
fn random_grid(w: usize, h: usize, seed: u64) -> (PathingGrid, Point, Point) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pathing_grid = PathingGrid::new(w, h);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            pathing_grid.set_wall(Point::new(x, y), rng.gen_bool(0.25));
        }
    }
    let start = Point::new(5, 5);
    let end = Point::new(w as i32 - 5, h as i32 - 5);
    pathing_grid.set_start(start);
    pathing_grid.set_target(end);
    (pathing_grid, start, end)
}

fn open_grid(w: usize, h: usize) -> (PathingGrid, Point, Point) {
    let mut pathing_grid = PathingGrid::new(w, h);
    let start = Point::new(5, 5);
    let end = Point::new(w as i32 - 5, h as i32 - 5);
    pathing_grid.set_start(start);
    pathing_grid.set_target(end);
    (pathing_grid, start, end)
}

fn comparison_bench(c: &mut Criterion) {
    for (name, (grid, start, end)) in [
        ("open 50x25", open_grid(50, 25)),
        ("random 50x25", random_grid(50, 25, 0)),
    ] {
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{name}, {algorithm}").as_str(), |b| {
                b.iter(|| black_box(algorithm.solve(&grid, start, end)))
            });
        }
    }
}

criterion_group!(benches, comparison_bench);
criterion_main!(benches);
