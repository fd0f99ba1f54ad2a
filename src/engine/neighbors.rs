use crate::{Coordinate, Dimensions, Grid};

/// Relative positions of the eight cells surrounding a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Coordinates of the neighbors of `cell` that lie inside the board.
///
/// Edges do not wrap around, so corner cells have 3 neighbors and other
/// edge cells have 5.
pub fn neighbors(
    dimensions: Dimensions,
    cell: Coordinate,
) -> impl Iterator<Item = Coordinate> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let row = cell.row.checked_add_signed(dr)?;
        let column = cell.column.checked_add_signed(dc)?;
        dimensions
            .contains(row, column)
            .then_some(Coordinate::new(row, column))
    })
}

/// Number of alive cells among the in-bounds neighbors of (`row`, `column`).
pub fn count_live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    neighbors(grid.dimensions(), Coordinate::new(row, column))
        .map(|c| grid.get(c.row, c.column) as u8)
        .sum()
}
