//! Error types for the Tic-Tac-Toe crate

use thiserror::Error;

/// Contract violations raised by the board, the search and the game loop.
///
/// None of these are transient; each one means a caller asked for
/// something the current position does not allow.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: cell ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: u8, col: u8 },

    #[error("search requested on a finished board")]
    SearchOnTerminalBoard,

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}
