//! Errors raised while playing a game.

use crate::games::tictactoe::Mark;

/// Error that stops a game before it reaches an outcome.
///
/// Rejected human input is not an error; it is re-prompted locally.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// A player chose a cell that is occupied or out of range.
    #[display("{} chose illegal move {}", mark, index)]
    IllegalMove {
        /// Mark of the offending player.
        mark: Mark,
        /// The rejected cell index.
        index: usize,
    },

    /// A player was asked to move on a board with no empty cells.
    #[display("No moves available")]
    NoMovesAvailable,

    /// The human input stream reached end of file.
    #[display("Input closed before a valid move was entered")]
    InputClosed,

    /// Reading or writing the human input channel failed.
    #[display("Input error: {}", _0)]
    Input(String),

    /// A player was seated on the wrong side of the board.
    #[display("Player holding {} cannot take the {} seat", mark, seat)]
    MarkMismatch {
        /// Seat the player was given.
        seat: Mark,
        /// Mark the player actually holds.
        mark: Mark,
    },
}

impl std::error::Error for PlayError {}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Input(err.to_string())
    }
}
