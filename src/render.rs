use crate::{Grid, NiceInt};
use std::io::Write;

/// Receives every new board of a [`crate::Life`] instance.
pub trait Render {
    fn render(&mut self, board: &Grid, generation: u64);
}

/// Text renderer printing one line per row, e.g. `|*| |*|`,
/// followed by the alive/dead/total cell counts.
pub struct AsciiRenderer<W: Write> {
    out: W,
}

impl AsciiRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, board: &Grid, generation: u64) -> std::io::Result<()> {
        writeln!(self.out, "generation {}", NiceInt::from(generation))?;
        for row in board.iter_rows() {
            let mut line = String::with_capacity(1 + 2 * row.len());
            line.push('|');
            for &cell in row {
                line.push_str(if cell { "*|" } else { " |" });
            }
            writeln!(self.out, "{}", line)?;
        }
        let total = board.dimensions().area();
        let alive = board.population();
        writeln!(
            self.out,
            "alive: {}, dead: {}, total: {}",
            NiceInt::from(alive),
            NiceInt::from(total - alive),
            NiceInt::from(total)
        )?;
        self.out.flush()
    }
}

impl<W: Write> Render for AsciiRenderer<W> {
    fn render(&mut self, board: &Grid, generation: u64) {
        if let Err(e) = self.write_board(board, generation) {
            log::warn!("failed to render generation {}: {}", generation, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set_board;

    #[test]
    fn test_ascii_format() {
        let board = set_board(Some([[true, false], [false, false]])).unwrap();
        let mut renderer = AsciiRenderer::new(Vec::new());
        renderer.render(&board, 3);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "generation 3\n|*| |\n| | |\nalive: 1, dead: 3, total: 4\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let board = set_board(Some([[true]])).unwrap();
        AsciiRenderer::new(Broken).render(&board, 0);
    }
}
