//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title art, two blank rows, then the bordered board with
//! the score beside the top border and a key legend beside the middle rows.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const TITLE: [&str; 6] = [
    " _____  _____ _____  ____  _  ____ ",
    "/__ __\\/  __//__ __\\/  __\\/ \\/ ___\\",
    "  / \\  |  \\    / \\  |  \\/|| ||    \\",
    "  | |  |  /_   | |  |    /| |\\___ |",
    "  \\_/  \\____\\  \\_/  \\_/\\_\\\\_/\\____/",
    "                                   ",
];

/// Blank rows between the title and the board frame.
const TITLE_GAP: u16 = 2;

/// Legend beside a running game, as (row offset from the board middle, text).
const PLAYING_LEGEND: [(i16, &str); 8] = [
    (-5, "Controls:"),
    (-4, "A/Left - Move Left"),
    (-3, "D/Right - Move Right"),
    (-2, "W/Up - Rotate"),
    (-1, "S/Down - Soft Drop"),
    (0, "Space - Hard Drop"),
    (1, "P - Pause"),
    (2, "Q - Quit"),
];

const PAUSED_LEGEND: [(i16, &str); 4] = [
    (-3, "*** PAUSED ***"),
    (-1, "Controls:"),
    (0, "P - Resume"),
    (1, "Q - Quit"),
];

const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LOCKED: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const ACTIVE: CellStyle = CellStyle::fg(Rgb::new(80, 220, 220)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const TITLE_STYLE: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80)).bold();

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

/// Where the board frame landed in the last render; useful to tests and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_title: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_title: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            show_title: true,
        }
    }

    pub fn with_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Position of the board frame for a viewport.
    ///
    /// The frame is centered; the title sits above it only if the whole block fits.
    pub fn layout(&self, viewport: Viewport) -> (FrameRect, Option<u16>) {
        let (frame_w, frame_h) = self.frame_size();
        let title_h = TITLE.len() as u16 + TITLE_GAP;
        let with_title = self.show_title && viewport.height >= frame_h + title_h;
        let block_h = if with_title { frame_h + title_h } else { frame_h };

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(block_h) / 2;
        let (title_y, y) = if with_title {
            (Some(top), top + title_h)
        } else {
            (None, top)
        };
        (
            FrameRect {
                x,
                y,
                w: frame_w,
                h: frame_h,
            },
            title_y,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized only when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame, title_y) = self.layout(viewport);

        if let Some(ty) = title_y {
            for (i, line) in TITLE.iter().enumerate() {
                let w = line.chars().count() as u16;
                let tx = frame.x + frame.w.saturating_sub(w) / 2;
                fb.put_str(tx, ty + i as u16, line, TITLE_STYLE);
            }
        }

        self.draw_border(fb, frame);

        // Score sits to the right of the top border.
        let sx = fb.put_str(frame.x + frame.w, frame.y, "  Score: ", TEXT);
        fb.put_u32(sx, frame.y, snap.score, TEXT);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                if snap.board[y as usize][x as usize] != 0 {
                    self.fill_cell(fb, frame, x, y, '▓', LOCKED);
                }
            }
        }

        if let Some(active) = snap.active {
            for &(dx, dy) in get_shape(active.kind, active.rotation).iter() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_cell(fb, frame, x as u16, y as u16, '█', ACTIVE);
                }
            }
        }

        let legend: &[(i16, &str)] = if snap.paused {
            &PAUSED_LEGEND
        } else {
            &PLAYING_LEGEND
        };
        let mid = frame.y as i16 + 1 + BOARD_HEIGHT as i16 / 2;
        let lx = frame.x + frame.w + 3;
        for &(dy, text) in legend {
            let ly = mid + dy;
            if ly >= 0 {
                fb.put_str(lx, ly as u16, text, TEXT);
            }
        }

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect) {
        let FrameRect { x, y, w, h } = frame;
        fb.put_char(x, y, '+', BORDER);
        fb.put_char(x + w - 1, y, '+', BORDER);
        fb.put_char(x, y + h - 1, '+', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '+', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '-', BORDER);
            fb.put_char(x + dx, y + h - 1, '-', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '|', BORDER);
            fb.put_char(x + w - 1, y + dy, '|', BORDER);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: FrameRect, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, TEXT.bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_two_columns_per_cell() {
        assert_eq!(GameView::default().frame_size(), (30, 26));
        assert_eq!(GameView::new(1).frame_size(), (16, 26));
    }

    #[test]
    fn title_dropped_on_short_viewports() {
        let view = GameView::default();
        let (frame, title) = view.layout(Viewport::new(30, 26));
        assert_eq!(title, None);
        assert_eq!((frame.x, frame.y), (0, 0));

        let (frame, title) = view.layout(Viewport::new(30, 34));
        assert_eq!(title, Some(0));
        assert_eq!(frame.y, 8);
    }
}
