use crate::{
    engine, parse_json_board, parse_rle, random_board, set_board, Config, Dimensions, Grid,
    InvalidBoardError, Render,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// One independent Game of Life simulation.
///
/// The current board is private; [`Life::board`] hands out immutable
/// snapshots which stay valid after later steps replace the board.
pub struct Life {
    config: Config,
    board: Option<Arc<Grid>>, // `None` until the first initialization
    generation: u64,
    renderer: Option<Box<dyn Render + Send>>, // called after every board change
}

impl Default for Life {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Life {
    /// Creates a simulation without a board; random fill uses `dimensions`
    /// (25x25 when `None`).
    pub fn new(dimensions: Option<Dimensions>) -> Self {
        let config = Config::default();
        let dimensions = dimensions.unwrap_or(config.dimensions);
        Self::from_config(config.with_dimensions(dimensions))
    }

    /// Panics if the configured dimensions have zero rows or columns.
    pub fn from_config(config: Config) -> Self {
        let dims = config.dimensions;
        assert!(
            dims.rows >= 1 && dims.columns >= 1,
            "board dimensions must be positive, got {}x{}",
            dims.rows,
            dims.columns
        );
        Self {
            config,
            board: None,
            generation: 0,
            renderer: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dimensions of the current board, or of the next random fill if there is none.
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Number of steps since the board was last initialized.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the current board.
    pub fn board(&self) -> Option<Arc<Grid>> {
        self.board.clone()
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn Render + Send>) {
        self.renderer = Some(renderer);
    }

    pub fn take_renderer(&mut self) -> Option<Box<dyn Render + Send>> {
        self.renderer.take()
    }

    /// Replaces the board with random cells.
    pub fn random_board(&mut self) -> &Grid {
        let dims = self.config.dimensions;
        info!(
            "random {}x{} board (seed {:?})",
            dims.rows, dims.columns, self.config.seed
        );
        self.generation = 0;
        self.replace(random_board(dims, self.config.seed))
    }

    /// Replaces the board with explicit cells.
    ///
    /// On error the previous board, if any, is kept.
    pub fn set_board<D, R>(&mut self, data: Option<D>) -> Result<&Grid, InvalidBoardError>
    where
        D: AsRef<[R]>,
        R: AsRef<[bool]>,
    {
        let grid = set_board(data).inspect_err(|e| warn!("board rejected: {}", e))?;
        Ok(self.install(grid))
    }

    /// Replaces the board with a JSON array of boolean rows.
    pub fn load_json(&mut self, text: &str) -> Result<&Grid, InvalidBoardError> {
        let grid = parse_json_board(text).inspect_err(|e| warn!("board rejected: {}", e))?;
        Ok(self.install(grid))
    }

    /// Replaces the board with a decoded RLE pattern, which must be square.
    pub fn load_rle(&mut self, text: &str) -> Result<&Grid, InvalidBoardError> {
        let grid = parse_rle(text)
            .and_then(|rows| set_board(Some(rows)))
            .inspect_err(|e| warn!("board rejected: {}", e))?;
        Ok(self.install(grid))
    }

    /// Advances the board by one generation.
    ///
    /// A random board is created first if none has been set.
    pub fn step(&mut self) -> &Grid {
        let next = match self.board.as_deref() {
            Some(board) => engine::next_generation(board),
            None => engine::next_generation(self.random_board()),
        };
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            next.population()
        );
        self.replace(next)
    }

    fn install(&mut self, grid: Grid) -> &Grid {
        let dims = grid.dimensions();
        info!("explicit {}x{} board", dims.rows, dims.columns);
        self.config.dimensions = dims;
        self.generation = 0;
        self.replace(grid)
    }

    fn replace(&mut self, grid: Grid) -> &Grid {
        let board: &Grid = self.board.insert(Arc::new(grid));
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(board, self.generation);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const SEED: u64 = 42;
    const T: bool = true;
    const F: bool = false;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(u64, usize)>>>);

    impl Render for Recorder {
        fn render(&mut self, board: &Grid, generation: u64) {
            self.0.lock().unwrap().push((generation, board.population()));
        }
    }

    #[test]
    fn test_defaults() {
        let life = Life::new(None);
        assert_eq!(life.dimensions(), Dimensions::new(25, 25));
        assert!(life.board().is_none());
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_random_board_uses_dimensions() {
        let mut life = Life::new(Some(Dimensions::new(10, 10)));
        let board = life.random_board();
        assert_eq!(board.dimensions(), Dimensions::new(10, 10));
        assert_eq!(board.get_cells().len(), 100);
    }

    #[test]
    fn test_step_twice() {
        let mut life = Life::new(None);
        life.set_board(Some([[T, F, F], [T, T, F], [F, T, T]]))
            .unwrap();
        life.step();
        let second = life.step().to_rows();
        assert_eq!(second, vec![vec![T, T, F], vec![F, F, T], vec![T, F, T]]);
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut life = Life::from_config(Config::default().with_seed(Some(SEED)));
        life.random_board();
        let before = life.board().unwrap();
        let copy = (*before).clone();
        life.step();
        assert_eq!(*before, copy);
        assert_eq!(*life.board().unwrap(), engine::next_generation(&copy));
    }

    #[test]
    fn test_failed_set_board_keeps_previous() {
        let mut life = Life::new(None);
        life.set_board(Some([[T, F], [F, T]])).unwrap();
        let before = life.board().unwrap();
        let err = life
            .set_board(Some(vec![vec![T, F], vec![T, T], vec![F, T]]))
            .unwrap_err();
        assert!(matches!(err, InvalidBoardError::NotSquare { .. }));
        assert!(life.load_json("[]").is_err());
        assert_eq!(life.board().unwrap(), before);
        assert_eq!(life.dimensions(), Dimensions::new(2, 2));
    }

    #[test]
    fn test_set_board_changes_dimensions() {
        let mut life = Life::new(Some(Dimensions::new(25, 25)));
        life.load_rle("x = 3, y = 3\nbo$bo$bo!").unwrap();
        assert_eq!(life.dimensions(), Dimensions::new(3, 3));
        assert_eq!(life.step().to_rows(), vec![vec![F; 3], vec![T; 3], vec![F; 3]]);
        assert_eq!(life.random_board().dimensions(), Dimensions::new(3, 3));
    }

    #[test]
    fn test_rectangular_rle_is_rejected() {
        let mut life = Life::new(None);
        assert!(matches!(
            life.load_rle("x = 3, y = 1\n3o!"),
            Err(InvalidBoardError::NotSquare { .. })
        ));
        assert!(life.board().is_none());
    }

    #[test]
    fn test_step_without_board() {
        let mut life = Life::new(Some(Dimensions::new(4, 6)));
        assert_eq!(life.step().dimensions(), Dimensions::new(4, 6));
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_renderer_called_after_each_change() {
        let recorder = Recorder::default();
        let mut life = Life::new(None);
        life.set_renderer(Box::new(recorder.clone()));
        life.set_board(Some([[T, T], [T, F]])).unwrap();
        life.step();
        life.step();
        assert!(life.set_board(None::<Vec<Vec<bool>>>).is_err());
        assert_eq!(*recorder.0.lock().unwrap(), vec![(0, 3), (1, 4), (2, 4)]);

        assert!(life.take_renderer().is_some());
        life.step();
        assert_eq!(recorder.0.lock().unwrap().len(), 3);
        assert!(life.take_renderer().is_none());
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn test_zero_rows_rejected_on_creation() {
        Life::new(Some(Dimensions::new(0, 5)));
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn test_zero_columns_rejected_on_creation() {
        Life::from_config(Config::default().with_dimensions(Dimensions::new(4, 0)));
    }
}
