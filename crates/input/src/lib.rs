//! Input boundary: key events and line tokens mapped to game directions.
//!
//! This is the only place raw input is interpreted. Unknown tokens are rejected
//! here with [`InputError::UnknownToken`], so the engine only ever sees a valid
//! [`crate::types::Direction`].

pub mod lines;
pub mod map;

pub use tui_2048_types as types;

pub use lines::{direction_from_token, InputError, LineInput};
pub use map::{handle_key_event, should_quit};
