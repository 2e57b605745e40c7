//! Running many games and tallying their outcomes.

use crate::PlayError;
use crate::config::MatchConfig;
use crate::games::tictactoe::{Mark, Outcome};
use crate::orchestrator::Orchestrator;
use crate::render::TextRenderer;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Win and tie counts across a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Tied games.
    ties: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Tied => self.ties += 1,
        }
    }

    /// Total number of games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Games won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "After {} iterations, we see {} X wins, {} O wins and {} ties",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays `config.trials()` independent games and tallies the outcomes.
///
/// Every game gets a fresh board and fresh players. Player seeds are drawn
/// from `config.seed()` when set, making the whole run reproducible.
#[instrument(skip(config), fields(x = %config.x(), o = %config.o(), trials = config.trials()))]
pub fn simulate(config: &MatchConfig) -> Result<Tally, PlayError> {
    let mut seeds = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut tally = Tally::default();
    for trial in 0..*config.trials() {
        let player_x = config.x().build(Mark::X, seeds.random());
        let player_o = config.o().build(Mark::O, seeds.random());

        let mut game = Orchestrator::new(player_x, player_o)?;
        if *config.verbose() {
            game = game.with_observer(TextRenderer::new(std::io::stdout()));
        }

        let outcome = game.run()?;
        debug!(trial, %outcome, "Trial finished");
        tally.record(outcome);
    }

    info!(
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        ties = tally.ties,
        "Simulation complete"
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_display() {
        let mut tally = Tally::default();
        tally.record(Outcome::Won(Mark::X));
        tally.record(Outcome::Won(Mark::O));
        tally.record(Outcome::Won(Mark::O));
        tally.record(Outcome::Tied);

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.wins(Mark::O), 2);
        assert_eq!(
            tally.to_string(),
            "After 4 iterations, we see 1 X wins, 2 O wins and 1 ties"
        );
    }
}
