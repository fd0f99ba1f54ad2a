use crate::InvalidBoardError;

/// Largest pattern area accepted from an RLE header.
pub const MAX_RLE_CELLS: usize = 1 << 24;

/// Decodes an RLE pattern into rows of cells.
///
/// The header line (`x = W, y = H, ...`) fixes the size: every returned row
/// has `W` cells and there are `H` rows. Lines starting with `#` before the
/// header are comments.
pub fn parse_rle(text: &str) -> Result<Vec<Vec<bool>>, InvalidBoardError> {
    let data = text.as_bytes();
    let err = |msg: &str| InvalidBoardError::Rle(msg.to_string());

    let parse_next_number = |i: &mut usize| -> Result<usize, InvalidBoardError> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(err("expected a number"));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = text[*i..j]
            .parse::<usize>()
            .map_err(|_| err("expected a number"))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping blank and comment lines
    while i < data.len() && matches!(data[i], b'#' | b'\n' | b'\r' | b' ') {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(err("missing `x = .., y = ..` header"));
    }
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    if width == 0 || height == 0 {
        return Err(err("pattern size must be positive"));
    }
    if width.checked_mul(height).map_or(true, |n| n > MAX_RLE_CELLS) {
        return Err(err("pattern is too large"));
    }
    let mut result = vec![vec![false; width]; height];
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt): (usize, usize, usize) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width && y < height)
                    .ok_or_else(|| err("alive cell outside of the declared size"))?;
                result[y][x..end].fill(true);
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'b' => {
                x = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width)
                    .ok_or_else(|| err("row is longer than the declared width"))?;
                (i, cnt) = (i + 1, 1);
            }
            b'$' => {
                y = y
                    .checked_add(cnt)
                    .filter(|&end| end < height)
                    .ok_or_else(|| err("more rows than the declared height"))?;
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => return Ok(result),
            _ => return Err(err("unexpected symbol")),
        };
    }
    Err(err("missing terminating `!`"))
}
