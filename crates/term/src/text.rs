//! Plain-text board printer for line-oriented consoles.
//!
//! One line per row, `_` for empty cells, values right-aligned to the widest tile,
//! followed by a blank line:
//!
//! ```text
//! _ 2 _ _
//! _ _ _ _
//! 4 _ _ 2
//! _ _ _ _
//! ```

use std::fmt::Write;

use crate::core::GridSnapshot;

/// Placeholder for an empty cell
pub const EMPTY_GLYPH: char = '_';

pub fn render_text(snap: &GridSnapshot) -> String {
    let width = snap.max_tile.max(1).to_string().len();
    let mut out = String::with_capacity((width + 1) * snap.cells.len() + 1);

    for row in snap.rows() {
        for (column, &value) in row.iter().enumerate() {
            if column > 0 {
                out.push(' ');
            }
            if value == 0 {
                let _ = write!(out, "{:>width$}", EMPTY_GLYPH);
            } else {
                let _ = write!(out, "{:>width$}", value);
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}
