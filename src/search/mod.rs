//! Search module for the Tic-Tac-Toe AI
//!
//! Contains exhaustive minimax with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
