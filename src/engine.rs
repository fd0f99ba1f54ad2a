mod neighbors;

pub use neighbors::{count_live_neighbors, neighbors, NEIGHBOR_OFFSETS};

use crate::Grid;

/// B3/S23: state of a cell in the next generation.
pub fn cell_fate(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}

/// Computes the next generation of `grid`.
///
/// Every cell is evaluated against the unmodified input, and the result is a
/// newly allocated grid with the same dimensions.
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.dimensions(), |row, column| {
        let n = count_live_neighbors(grid, row, column);
        cell_fate(grid.get(row, column), n)
    })
}

/// Runs `generations` steps forward from `grid`.
pub fn advance(grid: &Grid, generations: u64) -> Grid {
    let mut curr = grid.clone();
    for _ in 0..generations {
        curr = next_generation(&curr);
    }
    curr
}
