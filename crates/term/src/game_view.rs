//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The two spawn rows at the top of the grid are never drawn; the visible
//! board is rows 2..22.
//!
//! Rows cleared by the last lock can be highlighted for a few frames with a
//! [`LineFlash`] fed from `GameState::take_last_event`.

use crate::core::{GameSnapshot, LockEvent};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, Position, COLUMNS, ROWS, SPAWN_ROWS};

/// Number of grid rows shown on screen
pub const VISIBLE_ROWS: usize = ROWS - SPAWN_ROWS;

/// How long cleared rows stay highlighted
pub const LINE_FLASH_MS: u32 = 120;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const FLASH_BG: Rgb = Rgb::new(230, 230, 230);

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

/// Colour for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(60, 90, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 200, 0),
        PieceKind::T => Rgb::new(160, 32, 240),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

/// Short-lived highlight of the rows cleared by the most recent lock.
#[derive(Debug, Clone, Default)]
pub struct LineFlash {
    event: Option<LockEvent>,
    remaining_ms: u32,
}

impl LineFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start flashing the rows `event` cleared. Locks that cleared nothing are ignored.
    pub fn trigger(&mut self, event: LockEvent) {
        if event.cleared_rows.is_empty() {
            return;
        }
        self.event = Some(event);
        self.remaining_ms = LINE_FLASH_MS;
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.event = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.event.is_some()
    }

    /// Grid rows to highlight, bottom to top
    pub fn rows(&self) -> &[usize] {
        self.event
            .as_ref()
            .map_or(&[][..], |event| event.cleared_rows.as_slice())
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
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
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let Frame { w, h, .. } = frame;

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w - 2,
            h - 2,
            ' ',
            CellStyle::new(Rgb::default(), BOARD_BG),
        );
        self.draw_border(fb, frame);

        let phase = snap.phase();
        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                match PieceKind::from_cell_value(value) {
                    Some(kind) if phase != GamePhase::NotStarted => {
                        self.draw_block(fb, frame, pos, kind)
                    }
                    _ => self.draw_empty(fb, frame, pos),
                }
            }
        }

        if phase == GamePhase::Playing {
            for pos in snap.active.tiles {
                self.draw_block(fb, frame, pos, snap.active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match phase {
            GamePhase::NotStarted => {
                self.draw_overlay_text(fb, frame, 0, "PRESS ANY KEY");
            }
            GamePhase::GameOver => {
                self.draw_overlay_text(fb, frame, 0, "GAME OVER");
                self.draw_overlay_text(fb, frame, 2, "PRESS ANY KEY");
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Overdraw the rows held by `flash` on a frame already produced by
    /// [`GameView::render_into`] for the same viewport.
    pub fn draw_line_flash(&self, flash: &LineFlash, viewport: Viewport, fb: &mut FrameBuffer) {
        let frame = self.frame(viewport);
        let style = CellStyle::new(Rgb::new(255, 255, 255), FLASH_BG).bold();
        for &row in flash.rows() {
            for col in 0..COLUMNS {
                let pos = Position::new(row as i32, col as i32);
                self.fill_cell(fb, frame, pos, ' ', style);
            }
        }
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (COLUMNS as u16) * self.cell_w + 2;
        let h = (VISIBLE_ROWS as u16) * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
        let Frame { x, y, w, h } = frame;

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

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell(fb, frame, pos, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell(fb, frame, pos, '█', style);
    }

    /// Fill one grid cell; cells in the hidden spawn rows or off the grid are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, ch: char, style: CellStyle) {
        let visible_row = pos.row - SPAWN_ROWS as i32;
        if visible_row < 0 || visible_row >= VISIBLE_ROWS as i32 {
            return;
        }
        if pos.col < 0 || pos.col >= COLUMNS as i32 {
            return;
        }
        let px = frame.x + 1 + (pos.col as u16) * self.cell_w;
        let py = frame.y + 1 + (visible_row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());

        let mut y = frame.y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        for kind in snap.next {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            let style = CellStyle::new(piece_color(kind), Rgb::default()).bold();
            fb.put_str(panel_x, y, kind.as_str(), style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
