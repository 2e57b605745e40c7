mod board;
mod rules;
mod types;

pub use board::{Board, BoardParseError};
pub use rules::lines_through;
pub use types::{Cell, GameStatus, Mark, Outcome};
