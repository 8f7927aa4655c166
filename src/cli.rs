//! Command-line interface for the Tic-Tac-Toe GUI.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::GameConfig;
use crate::ui::GameMode;

/// Tic-Tac-Toe against a friend or a perfect computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-Tac-Toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start directly in this mode instead of showing the menu
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value = "500")]
    pub ai_delay_ms: u64,

    /// Initial window width
    #[arg(long, default_value = "500")]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value = "500")]
    pub height: f32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Game modes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Play X against the computer
    Ai,
    /// Two humans share the mouse
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ai => GameMode::VsAi,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

impl Cli {
    /// Build the game configuration from parsed arguments
    pub fn config(&self) -> GameConfig {
        GameConfig {
            window_size: [self.width, self.height],
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            start_mode: self.mode.map(GameMode::from),
        }
    }
}
