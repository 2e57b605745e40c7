//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell arrays, kept apart from board storage so the
//! board and the search share one definition of a completed line.

pub mod win;

pub use win::{check_line, find_winner, lines_through};
