use crate::{Dimensions, Grid};
use serde_json::Value;
use thiserror::Error;

/// Reason an explicitly supplied board was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("no board data was provided")]
    Missing,
    #[error("board data must be a list of rows")]
    NotArrayLike,
    #[error("cell ({row}, {column}) is not a boolean")]
    NotBoolean { row: usize, column: usize },
    #[error("board data is empty")]
    Empty,
    #[error("board must be square: {rows} rows, but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("malformed JSON board: {0}")]
    Json(String),
    #[error("malformed RLE pattern: {0}")]
    Rle(String),
}

/// Creates a board where every cell is alive with probability 1/2.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_board(dimensions: Dimensions, seed: Option<u64>) -> Grid {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    Grid::from_fn(dimensions, |_, _| rng.gen_bool(0.5))
}

/// Creates a board from explicit rows of cells.
///
/// The data must be present, non-empty and square (as many cells in each row
/// as there are rows). Dimensions are taken from the data.
pub fn set_board<D, R>(data: Option<D>) -> Result<Grid, InvalidBoardError>
where
    D: AsRef<[R]>,
    R: AsRef<[bool]>,
{
    let data = data.ok_or(InvalidBoardError::Missing)?;
    let rows = data.as_ref();
    if rows.is_empty() {
        return Err(InvalidBoardError::Empty);
    }
    let n = rows.len();
    if let Some((row, len)) = rows
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(InvalidBoardError::NotSquare { rows: n, row, len });
    }
    Ok(Grid::from_rows(rows))
}

/// Parses a board written as a JSON array of arrays of booleans.
///
/// `null` counts as missing data; any other non-array value is rejected.
pub fn parse_json_board(text: &str) -> Result<Grid, InvalidBoardError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| InvalidBoardError::Json(e.to_string()))?;
    board_from_json(&value)
}

/// Validates an already parsed JSON value as board data.
pub fn board_from_json(value: &Value) -> Result<Grid, InvalidBoardError> {
    let rows = match value {
        Value::Null => return Err(InvalidBoardError::Missing),
        Value::Array(rows) => rows,
        _ => return Err(InvalidBoardError::NotArrayLike),
    };
    let rows = rows
        .iter()
        .map(|row| row.as_array().ok_or(InvalidBoardError::NotArrayLike))
        .collect::<Result<Vec<_>, _>>()?;
    // shape errors take precedence over cell types
    if rows.is_empty() {
        return Err(InvalidBoardError::Empty);
    }
    let n = rows.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(InvalidBoardError::NotSquare {
            rows: n,
            row,
            len: r.len(),
        });
    }
    let mut cells = Vec::with_capacity(n);
    for (row, r) in rows.into_iter().enumerate() {
        let r = r
            .iter()
            .enumerate()
            .map(|(column, v)| {
                v.as_bool()
                    .ok_or(InvalidBoardError::NotBoolean { row, column })
            })
            .collect::<Result<Vec<bool>, _>>()?;
        cells.push(r);
    }
    set_board(Some(cells))
}
