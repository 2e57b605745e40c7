//! Line geometry and win detection for tic-tac-toe.

use super::super::{Cell, Mark};

/// Main diagonal, top-left to bottom-right.
pub const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];

/// Anti-diagonal, top-right to bottom-left.
pub const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// Returns every line (row, column, and any diagonal) passing through `index`.
///
/// A cell lies on at most one of each diagonal; the centre lies on both.
pub fn lines_through(index: usize) -> impl Iterator<Item = [usize; 3]> {
    let row = index / 3 * 3;
    let col = index % 3;

    [
        Some([row, row + 1, row + 2]),
        Some([col, col + 3, col + 6]),
        MAIN_DIAGONAL.contains(&index).then_some(MAIN_DIAGONAL),
        ANTI_DIAGONAL.contains(&index).then_some(ANTI_DIAGONAL),
    ]
    .into_iter()
    .flatten()
}

/// Checks whether any line through `index` is uniformly `mark`.
///
/// Only the lines through `index` are examined, not the whole board.
pub fn check_line(cells: &[Cell; 9], index: usize, mark: Mark) -> bool {
    if index >= cells.len() {
        return false;
    }
    lines_through(index).any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(mark)))
}

/// Scans every occupied cell for a completed line.
pub fn find_winner(cells: &[Cell; 9]) -> Option<Mark> {
    cells.iter().enumerate().find_map(|(index, cell)| {
        cell.mark()
            .filter(|&mark| check_line(cells, index, mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(mark: Mark, indices: &[usize]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &i in indices {
            cells[i] = Cell::Occupied(mark);
        }
        cells
    }

    #[test]
    fn test_corner_has_three_lines() {
        assert_eq!(lines_through(0).count(), 3);
        assert_eq!(lines_through(8).count(), 3);
    }

    #[test]
    fn test_centre_has_four_lines() {
        let lines: Vec<_> = lines_through(4).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.contains(&MAIN_DIAGONAL));
        assert!(lines.contains(&ANTI_DIAGONAL));
    }

    #[test]
    fn test_edge_has_no_diagonal() {
        for index in [1, 3, 5, 7] {
            assert_eq!(lines_through(index).count(), 2, "edge {} should only have row and column", index);
        }
    }

    #[test]
    fn test_row_win() {
        let cells = cells_with(Mark::X, &[3, 4, 5]);
        assert!(check_line(&cells, 5, Mark::X));
        assert!(!check_line(&cells, 5, Mark::O));
    }

    #[test]
    fn test_column_win() {
        let cells = cells_with(Mark::O, &[1, 4, 7]);
        assert!(check_line(&cells, 1, Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let cells = cells_with(Mark::X, &[2, 4, 6]);
        assert!(check_line(&cells, 6, Mark::X));
    }

    #[test]
    fn test_diagonal_ignored_off_diagonal() {
        // Main diagonal is complete, but cell 1 does not lie on it.
        let cells = cells_with(Mark::X, &[0, 4, 8, 1]);
        assert!(!check_line(&cells, 1, Mark::X));
        assert!(check_line(&cells, 8, Mark::X));
    }

    #[test]
    fn test_find_winner() {
        assert_eq!(find_winner(&[Cell::Empty; 9]), None);
        assert_eq!(find_winner(&cells_with(Mark::O, &[0, 3, 6])), Some(Mark::O));
    }
}
