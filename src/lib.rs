//! Tic-Tac-Toe with a perfect-play computer opponent
//!
//! - Standard 3x3 board, X moves first
//! - Three in a row (row, column or diagonal) wins
//! - Full board without a line is a draw
//! - The computer plays O using exhaustive minimax with alpha-beta pruning
//!
//! # Architecture
//!
//! - [`board`]: Board representation and terminal-state queries
//! - [`rules`]: Win detection
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent wrapping the search
//! - [`ui`]: egui front end and game loop
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.set(Pos::new(1, 1), Mark::X).unwrap();
//!
//! // AI responds as O
//! let pos = engine.get_move(&board).unwrap();
//! board.set(pos, Mark::O).unwrap();
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Outcome, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
