//! Application configuration

use std::time::Duration;

use crate::ui::GameMode;

/// Settings owned by the presentation layer. The board and the search
/// never read any of these.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
    /// Pause before the computer answers a human move
    pub ai_delay: Duration,
    /// Skip the menu and start in this mode
    pub start_mode: Option<GameMode>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: [500.0, 500.0],
            ai_delay: Duration::from_millis(500),
            start_mode: None,
        }
    }
}
