//! TermPresenter - paints the game into a retained framebuffer.
//!
//! Screen layout (board `W` x `H`, each brick two columns wide):
//!
//! ```text
//! row 0        status line
//! row 1        ┌──── board ────┐ ┌─Next───┐
//! rows 2..H+2  │ bricks        │ │ 4x4    │
//! row H+2      └───────────────┘ └────────┘
//! ```
//!
//! The preview panel sits to the right of the board, behind its own frame
//! line. Its 4x4 grid has the piece pivot at (1, 1).

use crate::adapter::Presenter;
use crate::core::get_spawn_shape;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, PieceKind, Phase};

const PREVIEW_SIDE: u16 = 4;
const PREVIEW_PIVOT: i16 = 1;

const FRAME: Style = Style::fg(Rgb::new(110, 110, 130));
const TEXT: Style = Style::fg(Rgb::new(230, 230, 230)).bold();
const LOCKED: Style = Style::fg(Rgb::new(90, 160, 220));
const FALLING: Style = Style::fg(Rgb::new(240, 200, 60));
const PAUSED: Style = Style::fg(Rgb::new(150, 130, 70));
const EMPTY: Style = Style::fg(Rgb::new(50, 50, 60));

pub struct TermPresenter {
    fb: FrameBuffer,
    board_w: u8,
    board_h: u8,
}

impl TermPresenter {
    pub fn new(board_w: u8, board_h: u8) -> Self {
        let (w, h) = Self::frame_size(board_w, board_h);
        Self {
            fb: FrameBuffer::new(w, h),
            board_w,
            board_h,
        }
    }

    /// Terminal columns and rows needed for a `board_w` x `board_h` board.
    pub fn frame_size(board_w: u8, board_h: u8) -> (u16, u16) {
        (board_w as u16 * 2 + 14, board_h as u16 + 3)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    fn preview_left(&self) -> u16 {
        self.board_w as u16 * 2 + 3
    }

    fn draw_box(&mut self, x: u16, y: u16, inner_w: u16, inner_h: u16) {
        let right = x + inner_w + 1;
        let bottom = y + inner_h + 1;
        for cx in x + 1..right {
            self.fb.set(cx, y, Glyph::new('─', FRAME));
            self.fb.set(cx, bottom, Glyph::new('─', FRAME));
        }
        for cy in y + 1..bottom {
            self.fb.set(x, cy, Glyph::new('│', FRAME));
            self.fb.set(right, cy, Glyph::new('│', FRAME));
        }
        self.fb.set(x, y, Glyph::new('┌', FRAME));
        self.fb.set(right, y, Glyph::new('┐', FRAME));
        self.fb.set(x, bottom, Glyph::new('└', FRAME));
        self.fb.set(right, bottom, Glyph::new('┘', FRAME));
    }

    fn put_status(&mut self, text: &str) {
        let blank = Glyph::new(' ', Style::default());
        self.fb.fill_rect(0, 0, self.fb.width(), 1, blank);
        self.fb.put_str(1, 0, text, TEXT);
    }

    /// Paint one brick (two columns) with its top-left at screen `(sx, sy)`.
    fn put_brick(&mut self, sx: u16, sy: u16, row: u8, cell: Cell) {
        let glyphs = match cell {
            Cell::Empty => [Glyph::new(' ', EMPTY), Glyph::new('.', EMPTY)],
            Cell::Locked => [Glyph::new('[', LOCKED), Glyph::new(']', LOCKED)],
            Cell::Falling => [Glyph::new('█', FALLING), Glyph::new('█', FALLING)],
            Cell::PausedFalling => [
                Glyph::new(hatch(sx, row), PAUSED),
                Glyph::new(hatch(sx + 1, row), PAUSED),
            ],
        };
        self.fb.set(sx, sy, glyphs[0]);
        self.fb.set(sx + 1, sy, glyphs[1]);
    }
}

/// Diagonal hatching for paused bricks; the stripe shifts by
/// `1 + (row & 3)` columns on every board row.
fn hatch(screen_x: u16, row: u8) -> char {
    let phase = 1 + (row & 3) as u16;
    if (screen_x + phase) & 3 == 0 {
        '▓'
    } else {
        '░'
    }
}

/// Status line text for a phase.
pub fn status_text(phase: Phase, lines: u32) -> String {
    match phase {
        Phase::Playing => format!("Tetris  {lines} lines"),
        Phase::Paused => format!("PAUSED  {lines} lines"),
        Phase::GameOver => format!("GAME OVER!  {lines} lines"),
    }
}

impl Presenter for TermPresenter {
    fn draw_frames(&mut self) {
        self.fb.fill(Glyph::default());
        self.draw_box(0, 1, self.board_w as u16 * 2, self.board_h as u16);

        let px = self.preview_left();
        self.draw_box(px, 1, PREVIEW_SIDE * 2, PREVIEW_SIDE);
        self.fb.put_str(px + 1, 1, "Next", FRAME);

        self.put_status("Press Space");
    }

    fn clear_preview(&mut self) {
        let blank = Glyph::new(' ', EMPTY);
        self.fb
            .fill_rect(self.preview_left() + 1, 2, PREVIEW_SIDE * 2, PREVIEW_SIDE, blank);
    }

    fn draw_cell(&mut self, x: u8, y: u8, cell: Cell) {
        if x >= self.board_w || y >= self.board_h {
            return;
        }
        self.put_brick(1 + x as u16 * 2, 2 + y as u16, y, cell);
    }

    fn draw_preview(&mut self, kind: PieceKind) {
        self.clear_preview();
        let left = self.preview_left() + 1;
        for (dx, dy) in get_spawn_shape(kind) {
            let gx = PREVIEW_PIVOT + dx as i16;
            let gy = PREVIEW_PIVOT + dy as i16;
            if !(0..PREVIEW_SIDE as i16).contains(&gx) || !(0..PREVIEW_SIDE as i16).contains(&gy) {
                continue;
            }
            self.put_brick(left + gx as u16 * 2, 2 + gy as u16, 0, Cell::Falling);
        }
    }

    fn set_status(&mut self, phase: Phase, lines: u32) {
        self.put_status(&status_text(phase, lines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_fits_board_and_preview() {
        assert_eq!(TermPresenter::frame_size(10, 16), (34, 19));
    }

    #[test]
    fn frames_show_idle_prompt() {
        let mut p = TermPresenter::new(10, 16);
        p.draw_frames();
        assert!(p.frame().row_text(0).starts_with(" Press Space"));
        assert!(p.frame().row_text(1).starts_with("┌────"));
        assert!(p.frame().row_text(1).contains("┌Next"));
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let mut p = TermPresenter::new(10, 16);
        p.draw_frames();
        p.draw_cell(0, 0, Cell::Locked);
        p.draw_cell(9, 15, Cell::Falling);
        assert!(p.frame().row_text(2).starts_with("│[]"));
        assert_eq!(p.frame().get(19, 17).map(|g| g.ch), Some('█'));
        assert_eq!(p.frame().get(21, 17).map(|g| g.ch), Some('│'));
    }

    #[test]
    fn hatch_shifts_with_row() {
        let row0: String = (0..4).map(|x| hatch(x, 0)).collect();
        let row1: String = (0..4).map(|x| hatch(x, 1)).collect();
        assert_eq!(row0, "░░░▓");
        assert_eq!(row1, "░░▓░");
        assert_eq!(hatch(7, 4), hatch(7, 0));
    }

    #[test]
    fn status_texts() {
        assert_eq!(status_text(Phase::Playing, 3), "Tetris  3 lines");
        assert_eq!(status_text(Phase::Paused, 0), "PAUSED  0 lines");
        assert_eq!(status_text(Phase::GameOver, 12), "GAME OVER!  12 lines");
    }
}
