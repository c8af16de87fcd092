//! Line-oriented driver: one direction token per input line, the grid printed
//! after every move.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::engine::Game;
use crate::input::{InputError, LineInput};
use crate::term::render_text;

/// Message printed once the grid admits no further move
pub const GAME_OVER: &str = "game over!";

/// Play `game` from `input` until the grid is terminal or input ends.
///
/// Unknown tokens are reported on `out` and skipped.
pub fn run_plain<R: BufRead, W: Write>(game: &mut Game, input: R, mut out: W) -> Result<()> {
    write!(out, "{}", render_text(&game.snapshot()))?;
    if game.is_terminal() {
        writeln!(out, "{GAME_OVER}")?;
        return Ok(());
    }

    for item in LineInput::new(input) {
        match item {
            Ok(direction) => {
                let report = game.apply_move(direction);
                debug!(direction = direction.as_str(), ?report, "move");
                write!(out, "{}", render_text(&game.snapshot()))?;
                if report.terminal {
                    writeln!(out, "{GAME_OVER}")?;
                    return Ok(());
                }
            }
            Err(err @ InputError::UnknownToken(_)) => writeln!(out, "{err}")?,
            Err(err) => return Err(err).context("reading input"),
        }
    }

    out.flush()?;
    Ok(())
}
