/// Size of a board: number of rows and columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.rows * self.columns
    }

    pub const fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }
}

/// Zero-indexed `(row, column)` position on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Rectangular board of boolean cells stored row-major.
///
/// A `Grid` is never changed by a generation step: the engine reads one grid
/// and builds a fresh one. Dimensions are fixed for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    dimensions: Dimensions,
}

impl Grid {
    /// Creates a board with every cell dead.
    ///
    /// Both dimensions must be positive.
    pub fn blank(dimensions: Dimensions) -> Self {
        assert!(dimensions.rows >= 1 && dimensions.columns >= 1);
        Self {
            cells: vec![false; dimensions.area()],
            dimensions,
        }
    }

    /// Builds a board cell by cell from `f(row, column)`.
    pub fn from_fn(dimensions: Dimensions, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        assert!(dimensions.rows >= 1 && dimensions.columns >= 1);
        let mut cells = Vec::with_capacity(dimensions.area());
        for row in 0..dimensions.rows {
            for column in 0..dimensions.columns {
                cells.push(f(row, column));
            }
        }
        Self { cells, dimensions }
    }

    /// Builds a board from equally long rows.
    ///
    /// Callers validate the shape; see [`crate::set_board`] for the checked entry point.
    pub(crate) fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let dimensions = Dimensions::new(rows.len(), columns);
        assert!(dimensions.rows >= 1 && dimensions.columns >= 1);
        let mut cells = Vec::with_capacity(dimensions.area());
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), columns);
            cells.extend_from_slice(row);
        }
        Self { cells, dimensions }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    /// State of the cell at (`row`, `column`).
    ///
    /// Panics if the coordinate is outside the board.
    pub fn get(&self, row: usize, column: usize) -> bool {
        assert!(
            self.dimensions.contains(row, column),
            "cell ({}, {}) is outside of a {}x{} board",
            row,
            column,
            self.dimensions.rows,
            self.dimensions.columns
        );
        self.cells[column + row * self.dimensions.columns]
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[bool] {
        let w = self.dimensions.columns;
        &self.cells[row * w..(row + 1) * w]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.dimensions.columns)
    }

    /// Row-major copy of all cells.
    pub fn get_cells(&self) -> Vec<bool> {
        self.cells.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        let grid = Grid::blank(Dimensions::new(3, 4));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.get_cells().len(), 12);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_from_rows_row_major() {
        let grid = Grid::from_rows(&[[true, false, false], [false, false, true]]);
        assert_eq!(grid.dimensions(), Dimensions::new(2, 3));
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 2));
        assert!(!grid.get(1, 0));
        assert_eq!(grid.row(1), &[false, false, true]);
        assert_eq!(
            grid.to_rows(),
            vec![vec![true, false, false], vec![false, false, true]]
        );
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_from_fn() {
        let grid = Grid::from_fn(Dimensions::new(2, 2), |r, c| r == c);
        assert_eq!(grid.get_cells(), vec![true, false, false, true]);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range() {
        let grid = Grid::blank(Dimensions::new(2, 2));
        grid.get(2, 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_sized() {
        Grid::blank(Dimensions::new(0, 5));
    }
}
