//! Terminal rendering for the puzzle.
//!
//! Two front-ends share the same [`crate::core::GridSnapshot`] input:
//!
//! - [`text`]: a plain line printer for pipes and dumb consoles
//! - [`game_view`] + [`renderer`]: a framebuffer view flushed through crossterm
//!
//! Nothing here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::render_text;
