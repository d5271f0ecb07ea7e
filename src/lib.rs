//! TUI Bingo (workspace facade crate).
//!
//! This package exposes `tui_bingo::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. The settings
//! loader and the interactive session loop live here, next to the binary.

pub mod session;
pub mod settings;

pub use tui_bingo_core as core;
pub use tui_bingo_input as input;
pub use tui_bingo_term as term;
pub use tui_bingo_types as types;
