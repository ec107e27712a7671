//! Board rendering for the Ta-Te-Ti GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// What the board should highlight this frame
pub struct Overlay<'a> {
    pub current_turn: Stone,
    pub last_move: Option<usize>,
    pub suggested_move: Option<usize>,
    pub winning_line: Option<&'a [usize]>,
    pub game_over: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<usize> {
        let available_size = ui.available_size();
        self.size = board.size();

        let side = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let hovered = if overlay.game_over {
            None
        } else {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
                .map(|pos| board.index_of(pos))
        };

        if let Some(idx) = hovered {
            painter.rect_filled(self.cell_rect(board.pos_of(idx)).shrink(2.0), CornerRadius::same(4), CELL_HOVER);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(idx) = overlay.last_move {
            self.draw_last_move_marker(&painter, board.pos_of(idx));
        }

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, board, line);
        }

        if let Some(idx) = overlay.suggested_move {
            self.draw_mark(&painter, board.pos_of(idx), overlay.current_turn, 90);
        }

        let mut clicked = None;
        if let Some(idx) = hovered {
            if board.get_index(idx) == Stone::Empty {
                self.draw_mark(&painter, board.pos_of(idx), overlay.current_turn, 70);
                if response.clicked() {
                    clicked = Some(idx);
                }
            }
        }

        clicked
    }

    /// Inner grid lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let extent = self.size as f32 * self.cell_size;

        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, extent)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    /// Column letters on top, row numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.size {
            let center = self.cell_center(Pos::new(i as u8, i as u8));
            let letter = (b'A' + i as u8) as char;

            painter.text(
                Pos2::new(center.x, self.board_rect.min.y + BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                letter,
                font.clone(),
                GRID_LINE,
            );
            painter.text(
                Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center.y),
                egui::Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, &stone) in board.cells().iter().enumerate() {
            if stone != Stone::Empty {
                self.draw_mark(painter, board.pos_of(idx), stone, 255);
            }
        }
    }

    /// Draw an X (two strokes) or an O (ring) in a cell
    fn draw_mark(&self, painter: &Painter, pos: Pos, stone: Stone, alpha: u8) {
        let center = self.cell_center(pos);
        let r = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_WIDTH, ghost(mark_color(stone), alpha));

        match stone {
            Stone::X => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Stone::O => {
                painter.circle_stroke(center, r, stroke);
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Outline the winning cells and strike through them
    fn draw_winning_line(&self, painter: &Painter, board: &Board, line: &[usize]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for &idx in line {
            painter.rect_stroke(
                self.cell_rect(board.pos_of(idx)).shrink(4.0),
                CornerRadius::same(6),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            painter.line_segment(
                [self.cell_center(board.pos_of(first)), self.cell_center(board.pos_of(last))],
                stroke,
            );
        }
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col, self.size).then(|| Pos::new(row as u8, col as u8))
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert a board position to the screen centre of its cell
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
