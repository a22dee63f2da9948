//! GameView: maps the composed-board snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Each board cell takes two
//! terminal columns to compensate for glyph aspect ratio, matching the
//! engine's 10x20 grid to a roughly square playfield on screen.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

/// Renders the playfield centered in the viewport.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const FILLED: Rgb = Rgb::new(235, 235, 245);
const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const BORDER: Rgb = Rgb::new(160, 160, 170);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and fully repainted, so
    /// callers can reuse one buffer across frames.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            fg: BORDER,
            bg: SCREEN_BG,
        });

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let (ch, fg, bg) = if snap.filled(x, y) {
                    ('█', FILLED, WELL_BG)
                } else {
                    (' ', FILLED, WELL_BG)
                };
                for dx in 0..self.cell_w {
                    fb.set(
                        start_x + 1 + (x as u16) * self.cell_w + dx,
                        start_y + 1 + y as u16,
                        Cell { ch, fg, bg },
                    );
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        let edge = |ch| Cell {
            ch,
            fg: BORDER,
            bg: SCREEN_BG,
        };

        for dx in 1..w - 1 {
            fb.set(x + dx, y, edge('─'));
            fb.set(x + dx, y + h - 1, edge('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, edge('│'));
            fb.set(x + w - 1, y + dy, edge('│'));
        }
        fb.set(x, y, edge('┌'));
        fb.set(x + w - 1, y, edge('┐'));
        fb.set(x, y + h - 1, edge('└'));
        fb.set(x + w - 1, y + h - 1, edge('┘'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_count(fb: &FrameBuffer) -> usize {
        let mut count = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some('█') {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn empty_snapshot_renders_no_blocks() {
        let view = GameView::default();
        let fb = view.render(&BoardSnapshot::default(), Viewport::new(80, 24));
        assert_eq!(block_count(&fb), 0);
    }

    #[test]
    fn each_filled_cell_renders_two_columns() {
        let mut snap = BoardSnapshot::default();
        snap.cells[19][0] = 1;
        snap.cells[19][9] = 1;
        snap.cells[0][5] = 1;

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(block_count(&fb), 6);
    }

    #[test]
    fn small_viewports_do_not_panic() {
        let view = GameView::default();
        let _ = view.render(&BoardSnapshot::default(), Viewport::new(5, 3));
        let _ = view.render(&BoardSnapshot::default(), Viewport::new(0, 0));
    }
}
