//! Game state management for the Tic-Tac-Toe GUI
//!
//! Owns the board for the lifetime of a game and drives turns. Nothing
//! in here knows about pixels, so the whole game loop is testable
//! without a window.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::rules::find_winning_line;
use crate::{AIEngine, Board, GameError, Mark, MoveResult, Outcome, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human plays X, the computer plays O
    #[default]
    VsAi,
    /// Two humans alternate on the same board
    TwoPlayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::VsAi => "Play AI",
            GameMode::TwoPlayer => "Play Two Player",
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub outcome: Outcome,
    pub winning_line: Option<[Pos; 3]>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,

    engine: AIEngine,
    ai_delay: Duration,
    /// When the pending computer move becomes due
    ai_due: Option<Instant>,
}

impl GameState {
    pub fn new(mode: GameMode, ai_delay: Duration) -> Self {
        info!(?mode, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::X,
            outcome: Outcome::InProgress,
            winning_line: None,
            last_move: None,
            last_ai_result: None,
            message: None,
            engine: AIEngine::new(),
            ai_delay,
            ai_due: None,
        }
    }

    /// Clear the board and hand the first move back to X
    pub fn restart(&mut self) {
        info!(mode = ?self.mode, "restart");
        self.board.reset();
        self.current_turn = Mark::X;
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.message = None;
        self.ai_due = None;
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Check if the computer is due to move
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.current_turn == Mark::O && !self.is_game_over()
    }

    /// Check if a computer move is scheduled and not yet played
    #[inline]
    pub fn is_ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Place the current player's mark for a human click
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }

        let mark = self.current_turn;
        if let Err(err) = self.board.set(pos, mark) {
            warn!(row = pos.row, col = pos.col, %mark, "rejected move");
            return Err(err);
        }

        self.after_move(pos, mark);
        Ok(())
    }

    /// Play the scheduled computer move once its delay has elapsed.
    ///
    /// Returns `Ok(true)` if a move was made. The search runs to
    /// completion on the calling thread.
    pub fn poll_ai(&mut self, now: Instant) -> Result<bool, GameError> {
        match self.ai_due {
            Some(due) if now >= due => {}
            _ => return Ok(false),
        }
        self.ai_due = None;

        let result = self.engine.get_move_with_stats(&self.board)?;
        self.board.set(result.best_move, Mark::O)?;
        self.last_ai_result = Some(result);
        self.after_move(result.best_move, Mark::O);
        Ok(true)
    }

    /// Time left before the scheduled computer move
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        self.ai_due.map(|due| due.saturating_duration_since(now))
    }

    fn after_move(&mut self, pos: Pos, mark: Mark) {
        self.last_move = Some(pos);
        self.message = None;
        self.outcome = self.board.winner();

        if self.is_game_over() {
            if let Outcome::Win(winner) = self.outcome {
                self.winning_line = find_winning_line(&self.board, winner);
            }
            info!(outcome = ?self.outcome, "game over\n{}", self.board);
            return;
        }

        self.current_turn = mark.opponent();
        if self.is_ai_turn() {
            self.ai_due = Some(Instant::now() + self.ai_delay);
        }
    }

    /// Banner text for a finished game
    pub fn result_text(&self) -> Option<String> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Win(mark) => Some(format!("{} Wins!", mark)),
            Outcome::Draw => Some("Draw!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn vs_ai() -> GameState {
        GameState::new(GameMode::VsAi, Duration::ZERO)
    }

    #[test]
    fn test_two_player_alternates() {
        let mut state = GameState::new(GameMode::TwoPlayer, Duration::ZERO);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert_eq!(state.current_turn, Mark::O);
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.board.get(Pos::new(1, 1)), Cell::O);
        assert!(!state.is_ai_pending());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::TwoPlayer, Duration::ZERO);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert_eq!(
            state.try_place_mark(Pos::new(0, 0)),
            Err(GameError::InvalidMove { row: 0, col: 0 })
        );
        assert_eq!(state.current_turn, Mark::O);
    }

    #[test]
    fn test_ai_replies_after_human_move() {
        let mut state = vs_ai();
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_mark(Pos::new(2, 2)), Err(GameError::NotYourTurn));

        assert_eq!(state.poll_ai(Instant::now()), Ok(true));
        assert_eq!(state.board.get(Pos::new(1, 1)), Cell::O);
        assert_eq!(state.current_turn, Mark::X);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_ai_waits_for_delay() {
        let mut state = GameState::new(GameMode::VsAi, Duration::from_secs(60));
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        assert_eq!(state.poll_ai(Instant::now()), Ok(false));
        assert!(state.is_ai_pending());
        assert_eq!(state.board.mark_count(), 1);

        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(state.poll_ai(later), Ok(true));
        assert_eq!(state.board.mark_count(), 2);
    }

    #[test]
    fn test_x_win_ends_game() {
        let mut state = GameState::new(GameMode::TwoPlayer, Duration::ZERO);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.try_place_mark(Pos::new(r, c)).unwrap();
        }
        assert_eq!(state.outcome, Outcome::Win(Mark::X));
        assert_eq!(
            state.winning_line,
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(state.result_text().as_deref(), Some("X Wins!"));
        assert_eq!(state.try_place_mark(Pos::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_human_never_beats_ai() {
        // X keeps taking the first free cell; O must not lose
        let mut state = vs_ai();
        while !state.is_game_over() {
            let pos = state.board.legal_moves()[0];
            state.try_place_mark(pos).unwrap();
            state.poll_ai(Instant::now()).unwrap();
        }
        assert_ne!(state.outcome, Outcome::Win(Mark::X));
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut state = vs_ai();
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.poll_ai(Instant::now()).unwrap();
        state.restart();
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert!(!state.is_ai_pending());
        assert!(state.result_text().is_none());
    }
}
