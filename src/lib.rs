//! TUI 2048 (workspace facade crate).
//!
//! This package exposes `tui_2048::{core, engine, input, term, types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`. Game
//! configuration loading lives here because only the binary needs it.

pub mod config;
pub mod plain;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
