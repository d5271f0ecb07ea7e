//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, prompt parsing).
//!
//! # Card Dimensions
//!
//! The shipped game plays on a fixed card:
//!
//! - **Rows**: 3
//! - **Columns**: 5
//! - **Numbers**: 15 distinct values from the closed range 1-90
//!
//! The core accepts other shapes and ranges as parameters; these constants are
//! the defaults every layer agrees on.
//!
//! # Points
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_STARTING_POINTS` | 100 | Points each player starts with |
//! | `WRONG_ANSWER_PENALTY` | 1 | Wrong yes/no confirmation |
//! | `FALSE_CLAIM_PENALTY` | 3 | Line/bingo claimed but not (newly) complete |
//! | `LINE_REWARD_BP` | 1000 | Line reward, 10% of the pool |
//! | `BINGO_REWARD_BP` | 5000 | Bingo reward, 50% of the pool |
//!
//! Rewards are expressed in basis points (1/100 of a percent) of the pool total
//! so that flooring stays in integer arithmetic.
//!
//! # Examples
//!
//! ```
//! use tui_bingo_types::{Answer, ClaimKind, Difficulty, BOARD_COLS, BOARD_ROWS, CARD_SIZE};
//!
//! // Parse a claim (case-insensitive, short or long form)
//! assert_eq!(ClaimKind::from_str("L"), Some(ClaimKind::Line));
//! assert_eq!(ClaimKind::from_str("bingo"), Some(ClaimKind::Bingo));
//!
//! // Parse an answer
//! assert_eq!(Answer::from_str("y"), Some(Answer::Yes));
//!
//! // Difficulty accepts menu digits
//! assert_eq!(Difficulty::from_str("2"), Some(Difficulty::Medium));
//!
//! // Card dimensions
//! assert_eq!(BOARD_ROWS * BOARD_COLS, CARD_SIZE);
//! ```

use std::collections::BTreeSet;

/// A bingo number. The default range 1-90 fits comfortably in a byte.
pub type Number = u8;

/// Ordered set of numbers, used for both the drawn set and a player's marks.
pub type NumberSet = BTreeSet<Number>;

/// Card rows (3)
pub const BOARD_ROWS: usize = 3;

/// Card columns (5)
pub const BOARD_COLS: usize = 5;

/// Numbers on a standard card (15)
pub const CARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// Upper bound on card rows accepted by the generator.
pub const MAX_CARD_ROWS: usize = 8;

/// Lowest number in the draw pool (inclusive)
pub const NUMBER_LOW: Number = 1;

/// Highest number in the draw pool (inclusive)
pub const NUMBER_HIGH: Number = 90;

/// Points each player starts with.
pub const DEFAULT_STARTING_POINTS: i64 = 100;

/// Points lost for a wrong yes/no confirmation.
pub const WRONG_ANSWER_PENALTY: i64 = 1;

/// Points lost for a false (or repeated) line/bingo claim.
pub const FALSE_CLAIM_PENALTY: i64 = 3;

/// One whole in basis points.
pub const BASIS_POINTS: u32 = 10_000;

/// Line reward: 10% of the pool total.
pub const LINE_REWARD_BP: u32 = 1_000;

/// Bingo reward: 50% of the pool total.
pub const BINGO_REWARD_BP: u32 = 5_000;

/// Bots in easy mode (5 players total).
pub const DEFAULT_BOTS_EASY: usize = 4;

/// Bots in medium mode (10 players total).
pub const DEFAULT_BOTS_MEDIUM: usize = 9;

/// Bots in hard mode (20 players total).
pub const DEFAULT_BOTS_HARD: usize = 19;

/// What a player can claim after marking a number.
///
/// - **Line**: any single row fully marked
/// - **Bingo**: the entire card marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    Line,
    Bingo,
}

impl ClaimKind {
    /// Parse claim kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bingo_types::ClaimKind;
    ///
    /// assert_eq!(ClaimKind::from_str("l"), Some(ClaimKind::Line));
    /// assert_eq!(ClaimKind::from_str("LINE"), Some(ClaimKind::Line));
    /// assert_eq!(ClaimKind::from_str("b"), Some(ClaimKind::Bingo));
    /// assert_eq!(ClaimKind::from_str("n"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "line" => Some(ClaimKind::Line),
            "b" | "bingo" => Some(ClaimKind::Bingo),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimKind::Line => "line",
            ClaimKind::Bingo => "bingo",
        }
    }
}

/// A yes/no confirmation for "do you have this number?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse answer from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bingo_types::Answer;
    ///
    /// assert_eq!(Answer::from_str("Y"), Some(Answer::Yes));
    /// assert_eq!(Answer::from_str(" no "), Some(Answer::No));
    /// assert_eq!(Answer::from_str("maybe"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            _ => None,
        }
    }

    /// The truthful answer for whether a number is on the card.
    pub fn honest(on_card: bool) -> Self {
        if on_card {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Result of validating a claim against the player's marks.
///
/// - **Valid**: the condition holds and the reward had not been paid yet
/// - **False**: the condition does not hold
/// - **AlreadyAwarded**: the condition holds but this reward was already paid;
///   penalised exactly like a false claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimOutcome {
    Valid,
    False,
    AlreadyAwarded,
}

impl ClaimOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ClaimOutcome::Valid)
    }

    /// Convert to kebab-case string for display layers
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimOutcome::Valid => "valid",
            ClaimOutcome::False => "false",
            ClaimOutcome::AlreadyAwarded => "already-awarded",
        }
    }
}

/// Whether a seat is played by the person at the terminal or by a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Bot,
}

impl PlayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Human => "you",
            PlayerKind::Bot => "bot",
        }
    }
}

/// Match size selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from a menu digit or name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bingo_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("1"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("4"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "easy" => Some(Difficulty::Easy),
            "2" | "medium" => Some(Difficulty::Medium),
            "3" | "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Bot count used when no settings override it.
    pub fn default_bots(&self) -> usize {
        match self {
            Difficulty::Easy => DEFAULT_BOTS_EASY,
            Difficulty::Medium => DEFAULT_BOTS_MEDIUM,
            Difficulty::Hard => DEFAULT_BOTS_HARD,
        }
    }
}
