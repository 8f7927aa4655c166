//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: REFERENCE_WIDTH / BOARD_SIZE as f32,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Pos; 3]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        // Square board filling the available area; follows window resizes
        let available = ui.available_size();
        let side = available.x.min(available.y).max(BOARD_SIZE as f32);
        let offset = (available - Vec2::splat(side)) * 0.5;
        ui.add_space(offset.y);

        let (response, painter) = ui.allocate_painter(Vec2::new(available.x, side), Sense::click());
        self.board_rect = Rect::from_min_size(
            response.rect.min + Vec2::new(offset.x, 0.0),
            Vec2::splat(side),
        );
        self.cell_size = side / BOARD_SIZE as f32;

        painter.rect_filled(response.rect, CornerRadius::ZERO, BACKGROUND);

        let mut clicked_pos = None;
        if accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty_at(pos) {
                        painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_cell());
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        clicked_pos
    }

    fn scale(&self, size: f32) -> f32 {
        scaled(size, self.board_rect.width())
    }

    /// Draw the two horizontal and two vertical grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(self.scale(GRID_LINE_WIDTH), GRID_LINE);
        let rect = self.board_rect;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Horizontal line
            painter.line_segment(
                [
                    Pos2::new(rect.min.x, rect.min.y + offset),
                    Pos2::new(rect.max.x, rect.min.y + offset),
                ],
                stroke,
            );

            // Vertical line
            painter.line_segment(
                [
                    Pos2::new(rect.min.x + offset, rect.min.y),
                    Pos2::new(rect.min.x + offset, rect.max.y),
                ],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().iter().enumerate() {
            let pos = Pos::from_index(idx);
            match cell {
                Cell::X => self.draw_cross(painter, pos),
                Cell::O => self.draw_circle(painter, pos),
                Cell::Empty => {}
            }
        }
    }

    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let space = self.cell_size / 4.0;
        let rect = self.cell_rect(pos).shrink(space);
        let stroke = Stroke::new(self.scale(CROSS_WIDTH), CROSS_COLOR);

        painter.line_segment([rect.left_bottom(), rect.right_top()], stroke);
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
    }

    fn draw_circle(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size / 3.0;
        let stroke = Stroke::new(self.scale(CIRCLE_WIDTH), CIRCLE_COLOR);
        painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
    }

    /// Draw a line through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(self.scale(WIN_LINE_WIDTH), WIN_HIGHLIGHT);
        painter.line_segment(
            [self.board_to_screen(line[0]), self.board_to_screen(line[2])],
            stroke,
        );
    }

    /// Screen rectangle covered by a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
