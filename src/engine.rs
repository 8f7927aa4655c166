//! Computer opponent
//!
//! The engine plays O. It searches a private copy of the caller's board,
//! so hypothetical moves never show up on the board the game loop owns.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.set(Pos::new(0, 0), Mark::X).unwrap();
//!
//! let result = engine.get_move_with_stats(&board).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::error::GameError;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Move chosen for O
    pub best_move: Pos,
    /// Minimax value of the position after the move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Perfect-play opponent for the O side.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for O in the given position.
    ///
    /// # Errors
    ///
    /// `GameError::SearchOnTerminalBoard` if the game is already decided.
    pub fn get_move(&mut self, board: &Board) -> Result<Pos, GameError> {
        self.get_move_with_stats(board).map(|r| r.best_move)
    }

    /// Get the best move for O along with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, GameError> {
        let start = Instant::now();

        let mut work_board = *board;
        let result = self.searcher.best_move(&mut work_board)?;
        let move_result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        debug!(
            row = move_result.best_move.row,
            col = move_result.best_move.col,
            score = move_result.score,
            nodes = move_result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms = move_result.time_ms,
            "AI move chosen"
        );

        Ok(move_result)
    }
}
