//! The 3x3 board with incremental win detection.

use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, index 0 is top-left and 8 is
/// bottom-right. `winner` is maintained incrementally by [`Board::apply_move`]
/// and always agrees with the cells. Serialized as the bare cell array; the
/// winner is recomputed on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    cells: [Cell; 9],
    winner: Option<Mark>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells, recomputing the winner.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let winner = rules::find_winner(&cells);
        Self { cells, winner }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Indices of empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `mark` at `index`.
    ///
    /// Returns `false` without touching the board if `index` is out of range
    /// or already occupied.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => *cell = Cell::Occupied(mark),
            _ => return false,
        }
        if self.check_line(index, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Checks the row, column and diagonals through `index` for three of `mark`.
    pub fn check_line(&self, index: usize, mark: Mark) -> bool {
        rules::check_line(&self.cells, index, mark)
    }

    /// Returns true while at least one cell is empty.
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Clears `index` and the winner.
    ///
    /// Backtracking only: calls must mirror [`Board::apply_move`] in exact
    /// reverse order, since the winner is cleared unconditionally.
    pub fn undo_move(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
        self.winner = None;
    }

    /// Renders the index numbering used by human players.
    pub fn legend() -> String {
        (0..3)
            .map(|row| {
                let nums: Vec<String> = (row * 3..row * 3 + 3).map(|i| i.to_string()).collect();
                format!("|{}|", nums.join("|"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = chunk
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "|{}|", symbols.join("|"))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// Unrecognised cell character.
    #[display("Invalid cell character {:?} at index {}", _0, _1)]
    InvalidCell(char, usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells such as `"XX_OO____"`; `_`, `.` and space are empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (index, c) in chars.into_iter().enumerate() {
            cells[index] = match c {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '_' | '.' | ' ' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other, index)),
            };
        }
        Ok(Self::from_cells(cells))
    }
}
