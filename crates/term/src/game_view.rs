//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (top to bottom): title, bordered 4x4 card grid, stats line, entry
//! fields, message line, win banner, key help.

use crate::core::{Card, CardFace, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Field, GRID_COLS, GRID_ROWS, PAIR_COUNT};

/// Card tile width in terminal columns.
pub const TILE_W: u16 = 6;
/// Card tile height in terminal rows.
pub const TILE_H: u16 = 3;
const GAP_X: u16 = 1;
const GAP_Y: u16 = 1;

const GRID_W: u16 = GRID_COLS as u16 * TILE_W + (GRID_COLS as u16 - 1) * GAP_X;
const GRID_H: u16 = GRID_ROWS as u16 * TILE_H + (GRID_ROWS as u16 - 1) * GAP_Y;

/// Bordered grid width: border + padding on both sides.
pub const FRAME_W: u16 = GRID_W + 4;
/// Bordered grid height: border on both sides.
pub const FRAME_H: u16 = GRID_H + 2;
/// Total rows used by the full layout.
pub const LAYOUT_H: u16 = FRAME_H + 6;

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
const ACCENT: CellStyle = CellStyle::new(Rgb::new(239, 68, 68), BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(120, 120, 140), BG);

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

/// Entry field contents and the current message, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptView<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub focus: Field,
    pub message: Option<&'a str>,
}

/// A lightweight terminal renderer for the memory grid.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    /// Hide the key help line (small terminals, tests).
    compact: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Top-left corner of the layout for a viewport.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(FRAME_W) / 2;
        let y = viewport.height.saturating_sub(LAYOUT_H) / 2;
        (x, y)
    }

    /// Top-left cell of the tile at grid position `index` (0..15).
    pub fn tile_origin(&self, viewport: Viewport, index: usize) -> (u16, u16) {
        let (x0, y0) = self.origin(viewport);
        let col = (index % GRID_COLS) as u16;
        let row = (index / GRID_COLS) as u16;
        (
            x0 + 2 + col * (TILE_W + GAP_X),
            y0 + 2 + row * (TILE_H + GAP_Y),
        )
    }

    /// Render the game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_prompt(snap, None, viewport, fb);
    }

    pub fn render_into_with_prompt(
        &self,
        snap: &GameSnapshot,
        prompt: Option<&PromptView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));

        let (x0, y0) = self.origin(viewport);

        fb.put_str_centered(x0, FRAME_W, y0, "MEMORY GAME", ACCENT);
        self.draw_border(fb, x0, y0 + 1, FRAME_W, FRAME_H, BORDER);

        for (i, card) in snap.cards.iter().enumerate() {
            let (tx, ty) = self.tile_origin(viewport, i);
            self.draw_tile(fb, tx, ty, card);
        }

        let mut y = y0 + 1 + FRAME_H;
        self.draw_stats(fb, x0, y, snap);
        y += 1;

        if let Some(p) = prompt {
            self.draw_prompt(fb, x0, y, p);
        }
        y += 1;

        if let Some(msg) = prompt.and_then(|p| p.message) {
            fb.put_str_centered(0, viewport.width, y, msg, ACCENT);
        }
        y += 1;

        if snap.won {
            let banner = format!("Congratulations! You won in {} attempts!", snap.attempts);
            fb.put_str_centered(0, viewport.width, y, &banner, LABEL);
        }
        y += 1;

        if !self.compact {
            let help = CellStyle::new(Rgb::new(120, 120, 120), BG);
            fb.put_str_centered(
                0,
                viewport.width,
                y,
                "0-9 type  Tab switch  Enter flip  R restart  Q quit",
                help,
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_prompt(
        &self,
        snap: &GameSnapshot,
        prompt: &PromptView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_prompt(snap, Some(prompt), viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card) {
        let face = card.face();
        let (bg, fg) = match face {
            CardFace::Hidden => (Rgb::new(30, 41, 59), Rgb::new(148, 163, 184)),
            CardFace::Revealed => (Rgb::new(51, 65, 85), Rgb::new(250, 250, 250)),
            CardFace::Matched => (Rgb::new(20, 83, 45), Rgb::new(134, 239, 172)),
        };
        let body = CellStyle::new(fg, bg);
        fb.fill_rect(x, y, TILE_W, TILE_H, ' ', body);

        let label = CellStyle::new(Rgb::new(160, 160, 170), bg);
        fb.put_u32(x, y, card.id() as u32 + 1, label);

        let glyph = match face {
            CardFace::Hidden => '?',
            CardFace::Revealed | CardFace::Matched => card.symbol().glyph(),
        };
        fb.put_char(x + TILE_W / 2, y + TILE_H / 2, glyph, body.bold());
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &GameSnapshot) {
        let mut cx = fb.put_str(x + 1, y, "Attempts: ", TEXT);
        cx = fb.put_u32(cx, y, snap.attempts, ACCENT);
        cx = fb.put_str(cx, y, "  Matches: ", TEXT);
        cx = fb.put_u32(cx, y, snap.matches as u32, ACCENT);
        cx = fb.put_str(cx, y, "/", TEXT);
        fb.put_u32(cx, y, PAIR_COUNT as u32, TEXT);
    }

    fn draw_prompt(&self, fb: &mut FrameBuffer, x: u16, y: u16, prompt: &PromptView<'_>) {
        let mut cx = fb.put_str(x + 1, y, "First ", TEXT);
        cx = self.draw_field(fb, cx, y, prompt.first, prompt.focus == Field::First);
        cx = fb.put_str(cx, y, "  Second ", TEXT);
        self.draw_field(fb, cx, y, prompt.second, prompt.focus == Field::Second);
    }

    fn draw_field(&self, fb: &mut FrameBuffer, x: u16, y: u16, text: &str, focused: bool) -> u16 {
        let bracket = if focused { ACCENT } else { TEXT };
        let value = CellStyle::new(Rgb::new(250, 250, 250), Rgb::new(30, 41, 59));

        let mut cx = fb.put_str(x, y, "[", bracket);
        let mut chars = text.chars();
        for _ in 0..2 {
            fb.put_char(cx, y, chars.next().unwrap_or('_'), value);
            cx = cx.saturating_add(1);
        }
        fb.put_str(cx, y, "]", bracket)
    }
}
