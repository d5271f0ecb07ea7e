//! Terminal input module (game-facing).
//!
//! Line-oriented: the game asks one question per draw and reads one line back.
//! [`map`] turns raw lines into typed replies and [`prompt`] drives any
//! `BufRead`/`Write` pair, so the same code serves stdin and scripted tests.

pub mod map;
pub mod prompt;

pub use tui_bingo_types as types;

pub use map::{is_quit, parse_answer, parse_claim, parse_difficulty, ClaimChoice};
pub use prompt::{Prompter, Reply};
