//! Text rendering of game events.

use crate::games::tictactoe::Board;
use crate::orchestrator::{GameEvent, Observer};
use std::io::Write;
use tracing::warn;

/// Writes the board after each move, and the result at the end.
pub struct TextRenderer<W> {
    output: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }

    fn render(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::Started { first_mover } => {
                writeln!(self.output, "{}", Board::legend())?;
                writeln!(self.output, "{} moves first", first_mover)?;
            }
            GameEvent::MoveMade { mark, index, board } => {
                writeln!(self.output, "{} makes a move to square {}", mark, index)?;
                writeln!(self.output, "{}", board)?;
                writeln!(self.output)?;
            }
            GameEvent::GameOver { outcome } => writeln!(self.output, "{}", outcome)?,
        }
        self.output.flush()
    }
}

impl<W: Write> Observer for TextRenderer<W> {
    fn notify(&mut self, event: &GameEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to render game event");
        }
    }
}
