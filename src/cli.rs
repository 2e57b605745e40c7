//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_minimax::PlayerKind;

/// Tic-tac-toe with human, random and minimax players
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or simulate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game, printing the board after every move
    Play {
        /// Strategy playing X
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        x: PlayerKind,

        /// Strategy playing O (moves first)
        #[arg(long, value_enum, default_value_t = PlayerKind::Genius)]
        o: PlayerKind,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play many games and tally wins and ties
    Simulate {
        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Strategy playing X (overrides config)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Strategy playing O (overrides config)
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Number of games (overrides config)
        #[arg(short, long)]
        trials: Option<u32>,

        /// Seed for reproducible runs (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
