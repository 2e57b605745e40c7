//! Exhaustive minimax player.
//!
//! The search walks the full game tree below the current position, mutating
//! a scratch board in place and undoing each candidate before trying the
//! next. There is no pruning and no memoization; with at most eight empty
//! cells below the opening the tree is small enough to enumerate.

use super::Player;
use crate::PlayError;
use crate::games::tictactoe::{Board, Mark};
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

/// Best move found below a node, with its score from the maximizer's view.
///
/// `position` is `None` at terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SearchResult {
    /// Cell index that leads to `score`.
    pub position: Option<usize>,
    /// Positive favours the maximizer; larger magnitudes are reached sooner.
    pub score: i32,
}

/// Genius computer player backed by minimax.
pub struct GeniusPlayer {
    mark: Mark,
    rng: StdRng,
    nodes: u64,
    last_search_nodes: u64,
}

impl GeniusPlayer {
    /// Creates a genius player seeded from the operating system.
    pub fn new(mark: Mark) -> Self {
        Self::from_rng(mark, StdRng::from_os_rng())
    }

    /// Creates a reproducible genius player.
    ///
    /// The seed only affects the opening move; searched moves are deterministic.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self::from_rng(mark, StdRng::seed_from_u64(seed))
    }

    fn from_rng(mark: Mark, rng: StdRng) -> Self {
        Self {
            mark,
            rng,
            nodes: 0,
            last_search_nodes: 0,
        }
    }

    /// Number of nodes visited by the most recent move selection.
    ///
    /// Zero after an opening move, which is chosen without searching.
    pub fn last_search_nodes(&self) -> u64 {
        self.last_search_nodes
    }

    /// Scores every line of play from `board` with `player` to move.
    ///
    /// Terminal wins score `empty_count + 1`, so faster wins and slower
    /// losses are preferred. Ties between candidates go to the lowest index.
    ///
    /// Not reentrant: `board` is mutated during the search and is restored
    /// before returning.
    pub fn minimax(&mut self, board: &mut Board, player: Mark) -> SearchResult {
        self.nodes += 1;

        let maximizer = self.mark;
        let other = player.opponent();

        if board.winner() == Some(other) {
            let magnitude = board.empty_count() as i32 + 1;
            let score = if other == maximizer {
                magnitude
            } else {
                -magnitude
            };
            return SearchResult::new(None, score);
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return SearchResult::new(None, 0);
        }

        let maximizing = player == maximizer;
        let mut best = SearchResult::new(None, if maximizing { i32::MIN } else { i32::MAX });

        for candidate in moves {
            let placed = board.apply_move(candidate, player);
            debug_assert!(placed, "search candidate {} was occupied", candidate);

            let mut result = self.minimax(board, other);
            board.undo_move(candidate);
            result.position = Some(candidate);

            let improves = if maximizing {
                result.score > best.score
            } else {
                result.score < best.score
            };
            if improves {
                best = result;
            }
        }

        best
    }
}

impl Player for GeniusPlayer {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(PlayError::NoMovesAvailable);
        }

        self.nodes = 0;

        // Every opening is equally good by symmetry; skip the full tree.
        if moves.len() == 9 {
            self.last_search_nodes = 0;
            let index = moves[self.rng.random_range(0..moves.len())];
            debug!(index, "Genius player chose opening move");
            return Ok(index);
        }

        let mut scratch = board.clone();
        let best = self.minimax(&mut scratch, self.mark);
        self.last_search_nodes = self.nodes;
        trace!(nodes = self.nodes, score = best.score, "Search complete");

        let index = best.position.ok_or(PlayError::NoMovesAvailable)?;
        debug!(index, score = best.score, "Genius player chose move");
        Ok(index)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Genius computer"
    }
}
