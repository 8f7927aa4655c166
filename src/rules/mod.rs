//! Game rules for Tic-Tac-Toe
//!
//! Win detection over the 8 lines of the 3x3 board.

pub mod win;

pub use win::{check_winner, find_winning_line, has_three_in_row, LINES};
