//! Minimax search with alpha-beta pruning
//!
//! The computer always plays O and maximizes; X minimizes. Terminal
//! positions score +1 (O wins), -1 (X wins) or 0 (draw) with no depth
//! discount, and every line is searched to a terminal position. The
//! 3x3 tree is small enough that no heuristic cutoff is needed.
//!
//! A single board is explored depth-first: each candidate move is
//! placed, searched and cleared again before the next one is tried.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.set(Pos::new(1, 1), Mark::X).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.best_move(&mut board).unwrap();
//! assert_eq!(result.score, 0);
//! ```

use tracing::trace;

use crate::board::{Board, Mark, Pos};
use crate::error::GameError;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes where the remaining candidates were skipped
    pub cutoffs: u64,
}

/// Search result containing the chosen move and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// First move in row-major order reaching the best score
    pub best_move: Pos,
    /// Minimax value of the position after `best_move`
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher. Holds only per-call statistics, never a board.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the optimal move for O.
    ///
    /// The root runs the maximizing branch once. Ties keep the first
    /// move found in row-major order, since only a strictly better score
    /// replaces the current best. `board` is back in its original state
    /// when this returns.
    pub fn best_move(&mut self, board: &mut Board) -> Result<SearchResult, GameError> {
        if board.winner().is_terminal() || board.is_full() {
            return Err(GameError::SearchOnTerminalBoard);
        }

        self.stats = SearchStats::default();
        let (score, best_move) = self.alpha_beta(board, -INF, INF, true);
        let best_move = best_move.ok_or(GameError::SearchOnTerminalBoard)?;

        Ok(SearchResult {
            best_move,
            score,
            nodes: self.stats.nodes,
            stats: self.stats,
        })
    }

    /// Value of `board` with O to move when `maximizing`, X otherwise.
    pub fn minimax(&mut self, board: &mut Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        self.alpha_beta(board, alpha, beta, maximizing).0
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;

        let outcome = board.winner();
        if outcome.is_terminal() {
            return (outcome.score(), None);
        }

        let mark = if maximizing { Mark::O } else { Mark::X };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in board.legal_moves() {
            if board.set(mov, mark).is_err() {
                // legal_moves only yields empty cells
                continue;
            }
            let score = self.minimax(board, alpha, beta, !maximizing);
            board.clear(mov);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                trace!(?mov, alpha, beta, "cutoff");
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    #[test]
    fn test_immediate_win() {
        let mut board = Board::from_cells([O, O, E, X, X, E, X, E, E]);
        let result = Searcher::new().best_move(&mut board).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_immediate_block() {
        let mut board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let result = Searcher::new().best_move(&mut board).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 2));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        let before = board;
        Searcher::new().best_move(&mut board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_rejected() {
        let mut won = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            Searcher::new().best_move(&mut won),
            Err(GameError::SearchOnTerminalBoard)
        );

        let mut drawn = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(
            Searcher::new().best_move(&mut drawn),
            Err(GameError::SearchOnTerminalBoard)
        );
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        let mut searcher = Searcher::new();
        for mov in Board::new().legal_moves() {
            board.set(mov, Mark::O).unwrap();
            assert_eq!(searcher.minimax(&mut board, -INF, INF, false), 0, "{:?}", mov);
            board.clear(mov);
        }
    }

    #[test]
    fn test_empty_board_picks_first_drawing_move() {
        let mut board = Board::new();
        let result = Searcher::new().best_move(&mut board).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Pos::new(0, 0));
    }

    #[test]
    fn test_terminal_values() {
        let mut searcher = Searcher::new();
        let mut x_wins = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(searcher.minimax(&mut x_wins, -INF, INF, true), -1);
        let mut o_wins = Board::from_cells([O, X, E, O, X, E, O, E, X]);
        assert_eq!(searcher.minimax(&mut o_wins, -INF, INF, false), 1);
        let mut draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(searcher.minimax(&mut draw, -INF, INF, true), 0);
    }

    #[test]
    fn test_stats_reset_per_call() {
        let mut searcher = Searcher::new();
        let mut board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
        let first = searcher.best_move(&mut board).unwrap();
        let second = searcher.best_move(&mut board).unwrap();
        assert_eq!(first, second);
        assert!(second.stats.cutoffs > 0);
        assert_eq!(searcher.stats().nodes, second.nodes);
    }
}
