//! Player that picks a uniformly random empty cell.

use super::Player;
use crate::PlayError;
use crate::games::tictactoe::{Board, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Random computer player.
pub struct RandomPlayer {
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the operating system.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible random player.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(PlayError::NoMovesAvailable);
        }
        let index = moves[self.rng.random_range(0..moves.len())];
        debug!(mark = %self.mark, index, "Random player chose move");
        Ok(index)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Random computer"
    }
}
