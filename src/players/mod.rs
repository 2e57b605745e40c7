//! Player trait and implementations.

mod genius;
mod human;
mod random;

pub use genius::{GeniusPlayer, SearchResult};
pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::PlayError;
use crate::games::tictactoe::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next move for this player's mark.
    ///
    /// Returns a cell index taken from `board.available_moves()`.
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError>;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Which strategy a seat is played by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Reads moves from standard input.
    Human,
    /// Picks a uniformly random empty cell.
    Random,
    /// Exhaustive minimax search.
    Genius,
}

impl PlayerKind {
    /// Builds a player of this kind holding `mark`.
    ///
    /// `seed` drives the player's random choices; human players ignore it and
    /// read from standard input.
    #[instrument]
    pub fn build(self, mark: Mark, seed: u64) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new(
                mark,
                std::io::stdin().lock(),
                std::io::stdout(),
            )),
            PlayerKind::Random => Box::new(RandomPlayer::with_seed(mark, seed)),
            PlayerKind::Genius => Box::new(GeniusPlayer::with_seed(mark, seed)),
        }
    }
}
