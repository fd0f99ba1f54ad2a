#![warn(clippy::all)]

mod board;
pub mod engine;
mod grid;
mod life;
mod render;
mod scheduler;
mod utils;

pub use board::{board_from_json, parse_json_board, random_board, set_board, InvalidBoardError};
pub use engine::{count_live_neighbors, next_generation};
pub use grid::{Coordinate, Dimensions, Grid};
pub use life::Life;
pub use render::{AsciiRenderer, Render};
pub use scheduler::{PlayState, Scheduler};
pub use utils::{parse_rle, Config, NiceInt};
