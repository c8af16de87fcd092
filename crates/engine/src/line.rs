//! Line reduction - the one-dimensional slide used by every direction.
//!
//! A line is a row or column already oriented so that tiles slide toward index 0.
//! Reduction is compact, merge once left to right, compact again:
//!
//! ```
//! use tui_2048_engine::line::reduce;
//!
//! let mut line = [2, 2, 2, 2];
//! reduce(&mut line);
//! assert_eq!(line, [4, 4, 0, 0]);
//! ```

use crate::types::Tile;

/// Slide non-zero tiles toward index 0, keeping their order, and zero the rest.
///
/// `[2, 0, 0, 2]` becomes `[2, 2, 0, 0]`.
pub fn compact(line: &mut [Tile]) {
    let mut write = 0;
    for read in 0..line.len() {
        let value = line[read];
        if value != 0 {
            line[write] = value;
            write += 1;
        }
    }
    line[write..].fill(0);
}

/// Merge equal neighbours in a single left-to-right pass.
///
/// Each merge writes the sum into the left cell, zeroes the right one and skips
/// past both, so a freshly merged tile never merges again in the same pass.
/// Returns the number of merges.
pub fn merge(line: &mut [Tile]) -> usize {
    let mut merges = 0;
    let mut j = 0;
    while j + 1 < line.len() {
        if line[j] != 0 && line[j] == line[j + 1] {
            line[j] = line[j].saturating_add(line[j + 1]);
            line[j + 1] = 0;
            merges += 1;
            j += 2;
        } else {
            j += 1;
        }
    }
    merges
}

/// Full reduction of one line. Returns the number of merges.
pub fn reduce(line: &mut [Tile]) -> usize {
    compact(line);
    let merges = merge(line);
    compact(line);
    merges
}
