//! Board rendering for the Slideways GUI
//!
//! The board is drawn as a grid of `rows x (cols + 2)` slots: the first and
//! last slot of each row are the shift buttons, the others are the cells.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Direction, Move, Player, Pos};

use super::theme::*;

/// A clickable slot of the board view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Cell(Pos),
    Shift(u8, Direction),
}

impl Slot {
    fn as_move(self) -> Move {
        match self {
            Slot::Cell(pos) => Move::Place(pos),
            Slot::Shift(row, direction) => Move::shift(row, direction),
        }
    }
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached slot size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked move, if legal.
    ///
    /// `legal` lists the moves the player to move may make; pass an empty
    /// slice for a read-only board.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current: Player,
        last_move: Option<Move>,
        legal: &[Move],
    ) -> Option<Move> {
        self.rows = board.rows();
        self.cols = board.cols();

        let available = ui.available_size();
        let slots_x = (self.cols + 2) as f32;
        let slots_y = self.rows as f32;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / slots_x)
            .min((available.y - 2.0 * BOARD_MARGIN) / slots_y)
            .clamp(8.0, MAX_CELL_SIZE);

        let size = Vec2::new(
            slots_x * self.cell_size + 2.0 * BOARD_MARGIN,
            slots_y * self.cell_size + 2.0 * BOARD_MARGIN,
        );

        let mut clicked = None;
        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            self.board_rect = response.rect;

            painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
            self.draw_cells(&painter, board);
            self.draw_shift_buttons(&painter, legal);

            if let Some(Move::Place(pos)) = last_move {
                self.draw_last_move_marker(&painter, pos);
            }

            if legal.is_empty() {
                return;
            }

            for mv in legal {
                if let Move::Place(pos) = mv {
                    self.draw_legal_highlight(&painter, *pos);
                }
            }

            if let Some(slot) = response.hover_pos().and_then(|p| self.screen_to_slot(p)) {
                let mv = slot.as_move();
                let is_legal = legal.contains(&mv);
                self.draw_hover_preview(&painter, slot, current, is_legal);

                if response.clicked() && is_legal {
                    clicked = Some(mv);
                }
            }
        });

        clicked
    }

    /// Draw every cell of the board
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Pos::new(row as u8, col as u8);
                let rect = self.cell_rect(pos);

                match board.get(pos) {
                    Cell::Sentinel => {
                        painter.rect_filled(rect, CornerRadius::same(4), SENTINEL_CELL);
                    }
                    Cell::Empty => {
                        painter.rect_filled(rect, CornerRadius::same(4), EMPTY_CELL);
                    }
                    Cell::Owned(player) => {
                        painter.rect_filled(rect, CornerRadius::same(4), EMPTY_CELL);
                        self.draw_mark(painter, pos, player_color(player));
                    }
                }
                if !board.get(pos).is_sentinel() {
                    painter.rect_stroke(
                        rect,
                        CornerRadius::same(4),
                        Stroke::new(1.0, CELL_BORDER),
                        egui::StrokeKind::Inside,
                    );
                }
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(1.5, 1.5),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, color);
    }

    /// Draw ◀ and ▶ at both ends of every row
    fn draw_shift_buttons(&self, painter: &Painter, legal: &[Move]) {
        for row in 0..self.rows as u8 {
            for direction in [Direction::Left, Direction::Right] {
                let rect = self.shift_rect(row, direction);
                let enabled = legal.contains(&Move::shift(row, direction));
                let fill = if enabled { SHIFT_ENABLED } else { SHIFT_DISABLED };
                let arrow = match direction {
                    Direction::Left => "◀",
                    Direction::Right => "▶",
                };

                painter.rect_filled(rect, CornerRadius::same(6), fill);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    arrow,
                    FontId::proportional(self.cell_size * 0.4),
                    if enabled { TEXT_PRIMARY } else { TEXT_MUTED },
                );
            }
        }
    }

    fn draw_legal_highlight(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(2.0);
        painter.rect_stroke(
            rect,
            CornerRadius::same(3),
            Stroke::new(2.0, legal_highlight()),
            egui::StrokeKind::Inside,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-8.0, 8.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_hover_preview(&self, painter: &Painter, slot: Slot, current: Player, is_legal: bool) {
        match slot {
            Slot::Cell(pos) => {
                if is_legal {
                    self.draw_mark(painter, pos, player_preview(current));
                } else {
                    painter.rect_filled(
                        self.cell_rect(pos),
                        CornerRadius::same(4),
                        hover_invalid(),
                    );
                }
            }
            Slot::Shift(row, direction) => {
                if is_legal {
                    painter.rect_stroke(
                        self.shift_rect(row, direction),
                        CornerRadius::same(6),
                        Stroke::new(2.0, player_color(current)),
                        egui::StrokeKind::Inside,
                    );
                }
            }
        }
    }

    /// Screen rectangle of the slot at grid coordinates (including button columns)
    fn slot_rect(&self, row: usize, slot_col: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + slot_col as f32 * self.cell_size,
                BOARD_MARGIN + row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP / 2.0)
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        self.slot_rect(pos.row as usize, pos.col as usize + 1)
    }

    fn shift_rect(&self, row: u8, direction: Direction) -> Rect {
        let slot_col = match direction {
            Direction::Left => 0,
            Direction::Right => self.cols + 1,
        };
        self.slot_rect(row as usize, slot_col)
    }

    /// Convert screen coordinates to a board slot
    fn screen_to_slot(&self, screen_pos: Pos2) -> Option<Slot> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let slot_col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;
        if row >= self.rows || slot_col >= self.cols + 2 {
            return None;
        }

        let row = row as u8;
        Some(if slot_col == 0 {
            Slot::Shift(row, Direction::Left)
        } else if slot_col == self.cols + 1 {
            Slot::Shift(row, Direction::Right)
        } else {
            Slot::Cell(Pos::new(row, (slot_col - 1) as u8))
        })
    }
}
