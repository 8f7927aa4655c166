//! Main application for the Tic-Tac-Toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{Align2, CentralPanel, Context, FontId, Frame, RichText, TopBottomPanel};
use tracing::error;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::GameConfig;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    config: GameConfig,
    /// `None` while the mode menu is showing
    state: Option<GameState>,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let state = config
            .start_mode
            .map(|mode| GameState::new(mode, config.ai_delay));
        Self {
            config,
            state,
            board_view: BoardView::default(),
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        self.state = Some(GameState::new(mode, self.config.ai_delay));
    }

    /// Render the mode selection menu
    fn render_menu(&mut self, ctx: &Context) {
        let font_size = font_size_for_width(ctx.screen_rect().width());
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 4.0);
                    for mode in [GameMode::VsAi, GameMode::TwoPlayer] {
                        let text = RichText::new(mode.label()).size(font_size).color(TEXT_ACCENT);
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            chosen = Some(mode);
                        }
                        ui.add_space(font_size / 2.0);
                    }
                });
            });

        if let Some(mode) = chosen {
            self.start_game(mode);
        }
    }

    /// Render the board and the result banner
    fn render_game(&mut self, ctx: &Context) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(BACKGROUND).inner_margin(6.0))
            .show(ctx, |ui| {
                let status = if let Some(msg) = &state.message {
                    msg.clone()
                } else if state.is_game_over() {
                    "R: restart   Esc: menu".to_string()
                } else if state.is_ai_pending() {
                    "AI thinking...".to_string()
                } else {
                    format!("{} to move   R: restart   Esc: menu", state.current_turn)
                };
                ui.label(RichText::new(status).color(TEXT_MUTED));
            });

        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let accepting_input = !state.is_game_over() && !state.is_ai_turn();
                let clicked = self
                    .board_view
                    .show(ui, &state.board, state.winning_line, accepting_input);

                if let Some(pos) = clicked {
                    if let Err(err) = state.try_place_mark(pos) {
                        state.message = Some(err.to_string());
                    }
                }

                if let Some(text) = state.result_text() {
                    let rect = ui.max_rect();
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(font_size_for_width(rect.width())),
                        TEXT_ACCENT,
                    );
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (restart, menu) = ctx.input(|i| (i.key_pressed(egui::Key::R), i.key_pressed(egui::Key::Escape)));

        if menu {
            self.state = None;
        } else if restart {
            if let Some(state) = self.state.as_mut() {
                state.restart();
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Play the computer's move once its delay is up
        if let Some(state) = self.state.as_mut() {
            let now = Instant::now();
            if let Err(err) = state.poll_ai(now) {
                error!(%err, "AI move failed");
                state.message = Some(err.to_string());
            }
            if let Some(remaining) = state.ai_remaining(now) {
                ctx.request_repaint_after(remaining);
            }
        }

        if self.state.is_some() {
            self.render_game(ctx);
        } else {
            self.render_menu(ctx);
        }
    }
}
