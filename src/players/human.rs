//! Human player that reads moves from a text input channel.

use super::Player;
use crate::PlayError;
use crate::games::tictactoe::{Board, Mark};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Human player prompting on `output` and reading lines from `input`.
///
/// Invalid entries are re-prompted indefinitely; only end of input or an
/// I/O failure ends the wait with an error.
pub struct HumanPlayer<R, W> {
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }

    fn prompt(&mut self) -> Result<(), PlayError> {
        writeln!(self.output, "{}'s turn to make a move", self.mark)?;
        write!(self.output, "Input a valid square between 0 and 8: ")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(PlayError::NoMovesAvailable);
        }

        loop {
            self.prompt()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("Input closed while waiting for a move");
                return Err(PlayError::InputClosed);
            }

            match std::str::from_utf8(&buf).map(str::trim) {
                Ok(line) => match line.parse::<usize>() {
                    Ok(index) if available.contains(&index) => {
                        debug!(index, "Human chose move");
                        return Ok(index);
                    }
                    Ok(index) => warn!(index, "Rejected unavailable square"),
                    Err(_) => warn!(input = %line, "Rejected non-numeric input"),
                },
                Err(e) => warn!(error = %e, "Rejected input that is not UTF-8"),
            }

            let listed: Vec<String> = available.iter().map(|i| i.to_string()).collect();
            writeln!(
                self.output,
                "Please enter a valid square (available: {})",
                listed.join(", ")
            )?;
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Human"
    }
}
