//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the card/draw/claim engine and the turn orchestration
//! built on top of it. It has **no dependencies** on terminal rendering or
//! prompt I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical cards and draw order
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Runs headless, in tests, benches, or behind any front end
//!
//! # Module Structure
//!
//! - [`card`]: card generation (unique sample, then layout shuffle)
//! - [`draw`]: shared number pool drawn without repetition
//! - [`claim`]: line/bingo checks of a card against a set of numbers
//! - [`ledger`]: rewards and penalties against the pool total
//! - [`player`]: one seat's card, marks, score, and the honest bot policy
//! - [`game`]: turn orchestration and end-of-game detection
//! - [`rng`]: seedable LCG used by every random step
//! - [`summary`]: final standings for the display layer
//!
//! # Game Rules
//!
//! - **Card**: 3x5 grid of distinct numbers from 1-90
//! - **Draw**: one number per turn, never repeated, 90 turns at most
//! - **Line**: any fully marked row, paid 10% of the pool once per player
//! - **Bingo**: fully marked card, paid 50% of the pool; ends the game
//! - **Penalties**: wrong yes/no costs 1 point, a false claim costs 3
//!
//! # Example
//!
//! ```
//! use tui_bingo_core::{Game, GameConfig};
//! use tui_bingo_types::{Answer, ClaimKind};
//!
//! // Create a game against two bots with a fixed seed
//! let mut game = Game::new(GameConfig::default(), 2, Some(12345)).unwrap();
//! assert_eq!(game.pool_total(), 300);
//!
//! // Play one turn: the human answers honestly, then bots play
//! let number = game.draw().unwrap();
//! let (answer, claim) = game.human().honest_reply(number);
//! let turn = game.resolve_human(number, Some(answer), claim).unwrap();
//! assert!(turn.answer_correct());
//! let _events = game.play_bots(number).unwrap();
//!
//! // Each draw is played once
//! assert!(game.play_bots(number).is_err());
//!
//! // A claim on an empty card is false and costs 3 points
//! let mut game = Game::new(GameConfig::default(), 0, Some(1)).unwrap();
//! let number = game.draw().unwrap();
//! let before = game.human().points();
//! let turn = game
//!     .resolve_human(number, Some(Answer::Yes), Some(ClaimKind::Line))
//!     .unwrap();
//! assert!(game.human().points() < before);
//! assert!(!turn.won());
//! ```

pub mod card;
pub mod claim;
pub mod draw;
pub mod error;
pub mod game;
pub mod ledger;
pub mod player;
pub mod rng;
pub mod summary;

pub use tui_bingo_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use claim::{complete_rows, evaluate_claim, is_bingo_complete, is_line_complete};
pub use draw::NumberDrawer;
pub use error::{CardError, GameError};
pub use game::{BotEvent, ClaimResult, Game, GameConfig, HumanTurn, HUMAN_SEAT};
pub use ledger::{share_of_pool, PlayerStatus, Score, ScoreLedger, ScoringRules};
pub use player::{BotTurn, Player};
pub use rng::SimpleRng;
pub use summary::{GameOutcome, GameSummary, Standing};
