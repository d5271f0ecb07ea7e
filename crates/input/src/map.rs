//! Line mapping from typed input to game replies.

use crate::types::{Answer, ClaimKind, Difficulty};

/// Reply to "claim line or bingo?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimChoice {
    Claim(ClaimKind),
    NoClaim,
}

impl ClaimChoice {
    pub fn claim(self) -> Option<ClaimKind> {
        match self {
            ClaimChoice::Claim(kind) => Some(kind),
            ClaimChoice::NoClaim => None,
        }
    }
}

/// Map a line to a yes/no answer.
pub fn parse_answer(line: &str) -> Option<Answer> {
    Answer::from_str(line)
}

/// Map a line to a claim choice. An empty line or "n" skips the claim.
pub fn parse_claim(line: &str) -> Option<ClaimChoice> {
    let line = line.trim();
    if line.is_empty() {
        return Some(ClaimChoice::NoClaim);
    }
    match ClaimKind::from_str(line) {
        Some(kind) => Some(ClaimChoice::Claim(kind)),
        None => match line.to_lowercase().as_str() {
            "n" | "no" | "none" => Some(ClaimChoice::NoClaim),
            _ => None,
        },
    }
}

/// Map a line to a difficulty (menu digit or name).
pub fn parse_difficulty(line: &str) -> Option<Difficulty> {
    Difficulty::from_str(line)
}

/// Check if a line should quit the game.
pub fn is_quit(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "q" | "quit" | "exit"
    )
}
