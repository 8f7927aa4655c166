//! Win condition checking for Tic-Tac-Toe
//!
//! A mark wins with three in a row along any of the 8 lines:
//! 3 rows, 3 columns and 2 diagonals. A board with no winner and no
//! empty cells is a draw.

use crate::board::{Board, Cell, Mark, Outcome, Pos};

/// All winning lines, as row-major cell indices
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Check if a line is fully occupied by `mark`
#[inline]
fn line_owned_by(board: &Board, line: &[usize; 3], mark: Mark) -> bool {
    let cell = mark.to_cell();
    line.iter().all(|&idx| board.cells()[idx] == cell)
}

/// Check if `mark` has three in a row anywhere
#[inline]
pub fn has_three_in_row(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| line_owned_by(board, line, mark))
}

/// Find the positions of a winning line for `mark` if one exists
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<[Pos; 3]> {
    LINES
        .iter()
        .find(|line| line_owned_by(board, line, mark))
        .map(|line| line.map(Pos::from_index))
}

/// Classify a position.
///
/// X lines are examined before O lines, so a corrupted board holding
/// winning lines for both marks reports `Win(X)`.
pub fn check_winner(board: &Board) -> Outcome {
    for mark in [Mark::X, Mark::O] {
        if has_three_in_row(board, mark) {
            return Outcome::Win(mark);
        }
    }

    if board.cells().contains(&Cell::Empty) {
        Outcome::InProgress
    } else {
        Outcome::Draw
    }
}
