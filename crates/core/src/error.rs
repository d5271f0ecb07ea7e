//! Error types for card construction and game setup.

use thiserror::Error;

use crate::types::Number;

/// Reasons a card cannot be generated or built from explicit rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The range holds fewer distinct numbers than the card has cells
    #[error("card needs {needed} unique numbers but {low}..={high} only holds {available}")]
    InsufficientRange {
        needed: usize,
        available: usize,
        low: Number,
        high: Number,
    },

    /// Zero rows/columns, or more rows than supported
    #[error("invalid card shape {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// Lower bound above upper bound
    #[error("invalid number range {low}..={high}")]
    InvalidRange { low: Number, high: Number },

    /// Rows of an explicit card differ in length
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A number appears twice on an explicit card
    #[error("number {0} appears more than once")]
    DuplicateNumber(Number),

    /// A number on an explicit card is outside the range
    #[error("number {number} is outside {low}..={high}")]
    OutOfRange {
        number: Number,
        low: Number,
        high: Number,
    },
}

/// Errors raised while setting up a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("card generation failed: {0}")]
    Card(#[from] CardError),

    #[error("starting points must not be negative (got {0})")]
    NegativeStartingPoints(i64),

    /// Pool or reward arithmetic does not fit in an `i64`
    #[error("{starting_points} starting points for {players} players overflows the point pool")]
    PointsOverflow { starting_points: i64, players: usize },

    /// The number is not the one drawn for the current turn
    #[error("{0} is not the number drawn this turn")]
    NotCurrentDraw(Number),

    /// This seat already played the current draw
    #[error("turn {0} was already played")]
    TurnAlreadyPlayed(u32),

    #[error("the game is over")]
    GameOver,
}
