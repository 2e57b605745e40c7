//! Tic-tac-toe engine with interchangeable players.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with incremental win detection and move undo
//! - **Players**: human (text input), random, and exhaustive minimax
//! - **Orchestrator**: alternates turns, O first, until a win or a tie
//! - **Simulation**: plays many games and tallies the outcomes
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{GeniusPlayer, Mark, Outcome, play_one_game};
//!
//! # fn example() -> Result<(), tictactoe_minimax::PlayError> {
//! let outcome = play_one_game(
//!     Box::new(GeniusPlayer::with_seed(Mark::X, 1)),
//!     Box::new(GeniusPlayer::with_seed(Mark::O, 2)),
//! )?;
//! assert_eq!(outcome, Outcome::Tied);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod orchestrator;
mod players;
mod render;
mod simulation;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Errors
pub use error::PlayError;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardParseError, Cell, GameStatus, Mark, Outcome, lines_through,
};

// Crate-level exports - Game loop
pub use orchestrator::{FIRST_MOVER, GameEvent, Observer, Orchestrator, play_one_game};

// Crate-level exports - Players
pub use players::{GeniusPlayer, HumanPlayer, Player, PlayerKind, RandomPlayer, SearchResult};

// Crate-level exports - Rendering and simulation
pub use render::TextRenderer;
pub use simulation::{Tally, simulate};
