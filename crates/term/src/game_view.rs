//! GameView: maps a [`GridSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::Tile;

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

/// Tile size used when the preferred one does not fit the viewport.
const COMPACT_TILE: (u16, u16) = (5, 1);

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const EMPTY_BG: Rgb = Rgb::new(90, 84, 78);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// A lightweight terminal renderer for the puzzle grid.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for 5-digit tiles and keeps tiles roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    tile_w: u16,
    tile_h: u16,
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    fn layout(&self, size: u16, viewport: Viewport) -> Layout {
        let frame = |w: u16, h: u16| {
            (
                size.saturating_mul(w).saturating_add(2),
                size.saturating_mul(h).saturating_add(2),
            )
        };

        let (mut tile_w, mut tile_h) = (self.tile_w, self.tile_h);
        let (mut frame_w, mut frame_h) = frame(tile_w, tile_h);
        if frame_w > viewport.width || frame_h > viewport.height {
            (tile_w, tile_h) = COMPACT_TILE;
            (frame_w, frame_h) = frame(tile_w, tile_h);
        }

        Layout {
            tile_w,
            tile_h,
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());

        let size = snap.size as u16;
        let layout = self.layout(size, viewport);

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            Style::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h);

        for (row, cells) in snap.rows().enumerate() {
            for (column, &value) in cells.iter().enumerate() {
                self.draw_tile(fb, &layout, row as u16, column as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.terminal {
            let mid = layout.y + layout.frame_h / 2;
            let banner = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str_centered(layout.x, mid, layout.frame_w, " GAME OVER ", banner);
            fb.put_str_centered(layout.x, mid + 1, layout.frame_w, " r: restart ", VALUE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, row: u16, column: u16, value: Tile) {
        let px = layout.x + 1 + column * layout.tile_w;
        let py = layout.y + 1 + row * layout.tile_h;
        let mid = py + layout.tile_h / 2;

        if value == 0 {
            let style = Style::new(Rgb::new(130, 122, 114), EMPTY_BG);
            fb.fill_rect(px, py, layout.tile_w, layout.tile_h, ' ', style);
            fb.put_str_centered(px, mid, layout.tile_w, "·", style);
            return;
        }

        let (fg, bg) = tile_colors(value);
        let style = Style::new(fg, bg).bold();
        fb.fill_rect(px, py, layout.tile_w, layout.tile_h, ' ', style);
        fb.put_str_centered(px, mid, layout.tile_w, &tile_label(value, layout.tile_w), style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(PANEL_GAP);
        if panel_x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }

        let mut y = layout.y;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: Style, gap: u16| {
            fb.put_str(panel_x, y, text, style);
            y = y.saturating_add(1 + gap);
        };

        line(fb, "MOVES", LABEL, 0);
        line(fb, &snap.moves.to_string(), VALUE, 1);
        line(fb, "BEST", LABEL, 0);
        line(fb, &snap.max_tile.to_string(), VALUE, 1);
        line(fb, "KEYS", LABEL, 0);
        line(fb, "arrows / ijkl", VALUE, 0);
        line(fb, "r restart", VALUE, 0);
        line(fb, "q quit", VALUE, 0);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.put_str(x, y, "┌", BORDER);
    fb.put_str(right, y, "┐", BORDER);
    fb.put_str(x, bottom, "└", BORDER);
    fb.put_str(right, bottom, "┘", BORDER);
    for dx in 1..w - 1 {
        fb.put_str(x + dx, y, "─", BORDER);
        fb.put_str(x + dx, bottom, "─", BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_str(x, y + dy, "│", BORDER);
        fb.put_str(right, y + dy, "│", BORDER);
    }
}

/// Tile text that fits in `width` columns: `1024`, or `131k` when too wide.
fn tile_label(value: Tile, width: u16) -> String {
    let plain = value.to_string();
    if plain.len() <= width as usize {
        return plain;
    }
    if value >= 1_000_000 {
        format!("{}M", value / 1_000_000)
    } else {
        format!("{}k", value / 1_000)
    }
}

/// Foreground / background for a tile, darkening toward large values.
fn tile_colors(value: Tile) -> (Rgb, Rgb) {
    let light = Rgb::new(249, 246, 242);
    let dark = Rgb::new(119, 110, 101);
    match value {
        2 => (dark, Rgb::new(238, 228, 218)),
        4 => (dark, Rgb::new(237, 224, 200)),
        8 => (light, Rgb::new(242, 177, 121)),
        16 => (light, Rgb::new(245, 149, 99)),
        32 => (light, Rgb::new(246, 124, 95)),
        64 => (light, Rgb::new(246, 94, 59)),
        128 => (light, Rgb::new(237, 207, 114)),
        256 => (light, Rgb::new(237, 204, 97)),
        512 => (light, Rgb::new(237, 200, 80)),
        1024 => (light, Rgb::new(237, 197, 63)),
        2048 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    }
}
