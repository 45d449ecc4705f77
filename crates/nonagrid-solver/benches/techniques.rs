//! Benchmarks for the technique ladder.
//!
//! ```sh
//! cargo bench --bench techniques
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use nonagrid_core::Grid;
use nonagrid_solver::{Difficulty, TechniqueSolver};

const BOARDS: [(&str, &str); 2] = [
    (
        "pointing",
        "001957063000806070769130805007261350312495786056378000108609507090710608674583000",
    ),
    (
        "pairs",
        "400270600798156234020840007237468951849531726561792843082015479070024300004087002",
    ),
];

fn bench_solve(c: &mut Criterion) {
    for (name, board) in BOARDS {
        let grid: Grid = board.parse().unwrap();
        for difficulty in Difficulty::ALL {
            let solver = TechniqueSolver::for_difficulty(difficulty);
            c.bench_with_input(
                BenchmarkId::new(format!("solve_{difficulty}"), name),
                &grid,
                |b, grid| {
                    b.iter_batched(
                        || hint::black_box(grid.clone()),
                        |mut grid| solver.solve(&mut grid),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
