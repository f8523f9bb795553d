//! GameView: maps a `GameState` snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Short-lived visual effects owned by the caller's clock, not the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    /// Brighten the playfield (line-clear flash).
    pub flash: bool,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport, effects: Effects) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: viewport.height.saturating_sub(board_h + 2) / 2,
            w: board_w + 2,
            h: board_h + 2,
        };

        let bg = if effects.flash {
            BOARD_BG.lighten(60)
        } else {
            BOARD_BG
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), bg),
        );
        self.draw_border(&mut fb, frame);

        // Locked board cells.
        let board = state.board();
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                match board.get(row, col).flatten() {
                    Some(kind) => self.draw_block(&mut fb, frame, row, col, kind, bg),
                    None => self.fill_cell(
                        &mut fb,
                        frame,
                        row,
                        col,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), bg).dim(),
                    ),
                }
            }
        }

        if let Some(active) = state.active() {
            // Ghost first so the active piece draws over any overlap.
            if let Some(ghost_row) = state.ghost_row() {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), bg).dim();
                for (dr, dc) in active.shape().cells() {
                    self.fill_cell(&mut fb, frame, ghost_row + dr, active.col + dc, '░', ghost);
                }
            }
            for (row, col) in active.cells() {
                self.draw_block(&mut fb, frame, row, col, active.kind, bg);
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, frame);

        match state.status() {
            Status::Idle => self.draw_overlay(&mut fb, frame, &["PRESS ENTER"]),
            Status::Paused => self.draw_overlay(&mut fb, frame, &["PAUSED"]),
            Status::GameOver => self.draw_overlay(&mut fb, frame, &["GAME OVER", "R TO RESTART"]),
            Status::Playing => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, kind: PieceKind, bg: Rgb) {
        let style = CellStyle::new(piece_color(kind), bg).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    /// Fill one board cell; cells off the board are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, ch: char, style: CellStyle) {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return;
        }
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, number) in [
            ("SCORE", state.score()),
            ("LEVEL", state.level()),
            ("LINES", state.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &number.to_string(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "HOLD", label);
        let held = match state.hold_piece() {
            Some(kind) => {
                let style = CellStyle::new(piece_color(kind), PANEL_BG);
                // Greyed out until the next lock re-arms hold.
                let style = if state.can_hold() { style.bold() } else { style.dim() };
                (kind.letter(), style)
            }
            None => ("-", value),
        };
        fb.put_str(panel_x, y.saturating_add(1), held.0, held.1);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = frame.y.saturating_add(frame.h / 2);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(frame.x, top.saturating_add(i as u16), frame.w, line, style);
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reduce, SequenceSource};
    use crate::types::GameAction;

    #[test]
    fn empty_cells_draw_grid_dots() {
        let fb = GameView::default().render(&GameState::new(), Viewport::new(22, 22), Effects::default());
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
        assert_eq!(fb.get(2, 1).unwrap().ch, '·');
    }

    #[test]
    fn flash_brightens_playfield() {
        let view = GameView::default();
        let state = GameState::new();
        let calm = view.render(&state, Viewport::new(22, 22), Effects::default());
        let flash = view.render(&state, Viewport::new(22, 22), Effects { flash: true });

        assert_eq!(calm.get(1, 1).unwrap().style.bg, BOARD_BG);
        assert_ne!(flash.get(1, 1).unwrap().style.bg, BOARD_BG);
    }

    #[test]
    fn ghost_drawn_below_active_piece() {
        let mut source = SequenceSource::repeat(PieceKind::O);
        let state = reduce(&GameState::new(), GameAction::Start, &mut source);
        let fb = GameView::default().render(&state, Viewport::new(22, 22), Effects::default());

        // O at col 3 lands on rows 18-19; board origin is (1,1), 2 columns per cell.
        assert_eq!(fb.get(1 + 3 * 2, 1 + 19).unwrap().ch, '░');
        assert_eq!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
    }
}
