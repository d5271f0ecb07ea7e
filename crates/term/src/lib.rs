//! Terminal "game renderer" module.
//!
//! The game is turn-based and prompt-driven, so rendering is line-oriented:
//! views map core state into styled [`Line`]s (pure, no I/O) and
//! [`TerminalRenderer`] encodes them with crossterm and flushes to a writer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so their text can be asserted on directly
//! - Degrade to plain text when color is disabled

pub mod card_view;
pub mod line;
pub mod renderer;
pub mod summary_view;

pub use tui_bingo_core as core;
pub use tui_bingo_types as types;

pub use card_view::CardView;
pub use line::{Line, Span, Tone};
pub use renderer::{encode_lines_into, TerminalRenderer};
pub use summary_view::{
    bot_event_line, draw_header, human_feedback, instructions, summary_lines,
};
