//! Game module - turn orchestration over players, drawer, and ledger
//!
//! Each turn draws one number and every player is evaluated against it: the
//! human seat first (answer and optional claim supplied by the caller), then
//! bots in creation order. The game ends when a bingo is awarded or the pool
//! runs out.

use log::{debug, info};

use crate::card::Card;
use crate::draw::NumberDrawer;
use crate::error::GameError;
use crate::ledger::{share_of_pool, ScoreLedger, ScoringRules};
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::summary::{GameOutcome, GameSummary, Standing};
use crate::types::{
    Answer, ClaimKind, ClaimOutcome, Number, PlayerKind, BOARD_COLS, BOARD_ROWS,
    DEFAULT_STARTING_POINTS, NUMBER_HIGH, NUMBER_LOW,
};

/// Seat index of the human player.
pub const HUMAN_SEAT: usize = 0;

/// Everything the core needs to set up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_points: i64,
    pub rules: ScoringRules,
    pub rows: usize,
    pub cols: usize,
    pub low: Number,
    pub high: Number,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_points: DEFAULT_STARTING_POINTS,
            rules: ScoringRules::default(),
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            low: NUMBER_LOW,
            high: NUMBER_HIGH,
        }
    }
}

/// Result of a validated claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimResult {
    pub kind: ClaimKind,
    pub outcome: ClaimOutcome,
    pub delta: i64,
}

/// Everything that happened to the human seat on one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanTurn {
    pub number: Number,
    /// Ground truth: whether the number is on the card.
    pub on_card: bool,
    /// The answer given, `None` when the input could not be understood.
    pub answer: Option<Answer>,
    /// Penalty for a wrong or unreadable confirmation (0 when correct).
    pub answer_delta: i64,
    /// Whether the number was marked this turn.
    pub marked: bool,
    pub claim: Option<ClaimResult>,
}

impl HumanTurn {
    pub fn answer_correct(&self) -> bool {
        self.answer_delta == 0
    }

    pub fn total_delta(&self) -> i64 {
        self.answer_delta + self.claim.map_or(0, |c| c.delta)
    }

    pub fn won(&self) -> bool {
        matches!(
            self.claim,
            Some(ClaimResult {
                kind: ClaimKind::Bingo,
                outcome: ClaimOutcome::Valid,
                ..
            })
        )
    }
}

/// A reward paid to a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotEvent {
    pub seat: usize,
    pub kind: ClaimKind,
    pub reward: i64,
    /// Balance after the reward.
    pub points: i64,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    drawer: NumberDrawer,
    ledger: ScoreLedger,
    turn: u32,
    winner: Option<usize>,
    /// Last turn the human seat was resolved on (0 = none).
    human_played: u32,
    /// Last turn the bots played (0 = none).
    bots_played: u32,
    exhausted: bool,
    seed: u32,
}

impl Game {
    /// Set up the human seat plus `bot_count` bots.
    ///
    /// Cards and the draw order all derive from one seed; without a seed the
    /// game seeds itself from OS entropy. Any card error aborts setup, as does
    /// a pool whose rewards would not fit in an `i64`.
    pub fn new(
        config: GameConfig,
        bot_count: usize,
        seed: Option<u32>,
    ) -> Result<Self, GameError> {
        if config.starting_points < 0 {
            return Err(GameError::NegativeStartingPoints(config.starting_points));
        }
        let pool_total = checked_pool_total(&config, bot_count)?;

        let mut rng = SimpleRng::from_seed_or_entropy(seed);
        let seed = rng.state();

        let mut players = Vec::with_capacity(bot_count.saturating_add(1));
        for seat in 0..=bot_count {
            let card = Card::generate(config.rows, config.cols, config.low, config.high, &mut rng)?;
            let (name, kind) = if seat == HUMAN_SEAT {
                ("You".to_string(), PlayerKind::Human)
            } else {
                (format!("Bot-{}", seat), PlayerKind::Bot)
            };
            players.push(Player::new(name, kind, card, config.starting_points));
        }

        let drawer = NumberDrawer::new(config.low..=config.high, Some(rng.next_u32()));

        info!(
            "new game: {} players, pool {}, seed {}",
            players.len(),
            pool_total,
            seed
        );

        Ok(Self {
            config,
            players,
            drawer,
            ledger: ScoreLedger::new(pool_total, config.rules),
            turn: 0,
            winner: None,
            human_played: 0,
            bots_played: 0,
            exhausted: false,
            seed,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn human(&self) -> &Player {
        &self.players[HUMAN_SEAT]
    }

    pub fn bots(&self) -> &[Player] {
        &self.players[HUMAN_SEAT + 1..]
    }

    pub fn drawer(&self) -> &NumberDrawer {
        &self.drawer
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn pool_total(&self) -> i64 {
        self.ledger.pool_total()
    }

    /// Turns played so far (one per successful draw).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|seat| self.players.get(seat))
    }

    pub fn winner_seat(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.exhausted
    }

    /// Draw the number for the next turn.
    ///
    /// Returns `None` once the game is over: after a bingo, or when the pool
    /// is exhausted (which ends the game without a winner).
    pub fn draw(&mut self) -> Option<Number> {
        if self.is_over() {
            return None;
        }
        match self.drawer.draw_next() {
            Some(number) => {
                self.turn += 1;
                Some(number)
            }
            None => {
                self.exhausted = true;
                info!("pool exhausted after {} turns, no bingo", self.turn);
                None
            }
        }
    }

    /// Check that `number` is this turn's draw and that a seat last played on
    /// `played` may still act on it.
    ///
    /// A bingo stops further draws, but the winning draw stays playable so
    /// every seat is evaluated against it.
    fn check_turn(&self, number: Number, played: u32) -> Result<(), GameError> {
        if self.exhausted {
            return Err(GameError::GameOver);
        }
        if self.turn == 0 || self.drawer.latest() != Some(number) {
            return Err(GameError::NotCurrentDraw(number));
        }
        if played == self.turn {
            return Err(GameError::TurnAlreadyPlayed(self.turn));
        }
        Ok(())
    }

    /// Resolve the human seat's answer and claim for `number`, which must be
    /// the number drawn this turn. Each draw is resolved at most once.
    ///
    /// - A wrong answer costs the wrong-answer penalty.
    /// - An unreadable answer costs the penalty and is then treated as "no",
    ///   so a number that is on the card is charged again as missed.
    /// - "Yes" on a number that is on the card marks it.
    /// - A claim is only considered after "yes"; a false or repeated claim costs
    ///   the false-claim penalty, a valid bingo ends the game.
    pub fn resolve_human(
        &mut self,
        number: Number,
        answer: Option<Answer>,
        claim: Option<ClaimKind>,
    ) -> Result<HumanTurn, GameError> {
        self.check_turn(number, self.human_played)?;
        self.human_played = self.turn;

        let ledger = self.ledger;
        let human = &mut self.players[HUMAN_SEAT];
        let on_card = human.has_number(number);

        let mut marked = false;
        let answer_delta = match answer {
            Some(Answer::Yes) if on_card => {
                marked = human.mark_number(number);
                0
            }
            Some(Answer::No) if !on_card => 0,
            Some(_) => ledger.penalize_wrong_answer(human.score_mut()),
            None => {
                let invalid = ledger.penalize_wrong_answer(human.score_mut());
                let missed = if on_card {
                    ledger.penalize_wrong_answer(human.score_mut())
                } else {
                    0
                };
                invalid + missed
            }
        };

        let claim = match (answer, claim) {
            (Some(Answer::Yes), Some(kind)) => {
                let outcome = human.claim_outcome(kind);
                let delta = ledger.settle_claim(kind, outcome, human.score_mut());
                Some(ClaimResult {
                    kind,
                    outcome,
                    delta,
                })
            }
            _ => None,
        };

        debug!(
            "human: number {} on_card {} answer {:?} delta {}",
            number, on_card, answer, answer_delta
        );

        let turn = HumanTurn {
            number,
            on_card,
            answer,
            answer_delta,
            marked,
            claim,
        };
        if turn.won() {
            self.declare_winner(HUMAN_SEAT);
        }
        Ok(turn)
    }

    /// Let every bot play `number` (this turn's draw), returning the rewards
    /// paid.
    ///
    /// All bots are evaluated even if one of them completes bingo; the first
    /// bingo of the game decides the winner.
    pub fn play_bots(&mut self, number: Number) -> Result<Vec<BotEvent>, GameError> {
        self.check_turn(number, self.bots_played)?;
        self.bots_played = self.turn;

        let ledger = self.ledger;
        let mut events = Vec::new();
        let mut bingo_seats = Vec::new();

        for (offset, bot) in self.players[HUMAN_SEAT + 1..].iter_mut().enumerate() {
            let seat = HUMAN_SEAT + 1 + offset;
            let Some(kind) = bot.bot_play_turn(number).claim else {
                continue;
            };
            let reward = match kind {
                ClaimKind::Line => ledger.award_line(bot.score_mut()),
                ClaimKind::Bingo => {
                    bingo_seats.push(seat);
                    ledger.award_bingo(bot.score_mut())
                }
            };
            info!("{} claims {} for {:+}", bot.name(), kind.as_str(), reward);
            events.push(BotEvent {
                seat,
                kind,
                reward,
                points: bot.points(),
            });
        }

        for seat in bingo_seats {
            self.declare_winner(seat);
        }
        Ok(events)
    }

    fn declare_winner(&mut self, seat: usize) {
        if self.winner.is_none() {
            info!("{} wins on turn {}", self.players[seat].name(), self.turn);
            self.winner = Some(seat);
        }
    }

    /// Standings and outcome. A game that is not over is reported as abandoned.
    pub fn summary(&self) -> GameSummary {
        let outcome = match (self.winner, self.exhausted) {
            (Some(seat), _) => GameOutcome::Bingo {
                seat,
                name: self.players[seat].name().to_string(),
            },
            (None, true) => GameOutcome::PoolExhausted,
            (None, false) => GameOutcome::Abandoned,
        };

        let standings = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| Standing {
                seat,
                name: p.name().to_string(),
                kind: p.kind(),
                points: p.points(),
                has_line: p.has_line(),
                has_bingo: p.has_bingo(),
                marked: p.marked().len(),
            })
            .collect();

        GameSummary {
            outcome,
            turns: self.turn,
            pool_total: self.pool_total(),
            standings,
        }
    }
}

/// `starting_points` times the seat count, rejected when the pool or a
/// balance holding both rewards leaves `i64`.
fn checked_pool_total(config: &GameConfig, bot_count: usize) -> Result<i64, GameError> {
    let overflow = GameError::PointsOverflow {
        starting_points: config.starting_points,
        players: bot_count.saturating_add(1),
    };
    let players = bot_count.checked_add(1).ok_or_else(|| overflow.clone())?;
    let pool_total = i64::try_from(players)
        .ok()
        .and_then(|n| config.starting_points.checked_mul(n))
        .ok_or_else(|| overflow.clone())?;

    let rules = config.rules;
    config
        .starting_points
        .checked_add(share_of_pool(pool_total, rules.line_reward_bp))
        .and_then(|p| p.checked_add(share_of_pool(pool_total, rules.bingo_reward_bp)))
        .map(|_| pool_total)
        .ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CARD_SIZE;

    #[test]
    fn test_new_game_seats_and_pool() {
        let game = Game::new(GameConfig::default(), 4, Some(1)).unwrap();

        assert_eq!(game.players().len(), 5);
        assert_eq!(game.human().kind(), PlayerKind::Human);
        assert_eq!(game.human().name(), "You");
        assert!(game.bots().iter().all(Player::is_bot));
        assert_eq!(game.bots()[0].name(), "Bot-1");
        assert_eq!(game.bots()[3].name(), "Bot-4");
        assert_eq!(game.pool_total(), 500);
        assert!(game
            .players()
            .iter()
            .all(|p| p.card().len() == CARD_SIZE && p.points() == 100));
        assert!(!game.is_over());
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(GameConfig::default(), 2, Some(77)).unwrap();
        let mut b = Game::new(GameConfig::default(), 2, Some(77)).unwrap();

        for (pa, pb) in a.players().iter().zip(b.players()) {
            assert_eq!(pa.card(), pb.card());
        }
        for _ in 0..10 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_card_error_aborts_setup() {
        let config = GameConfig {
            high: 10,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config, 1, Some(1)),
            Err(GameError::Card(crate::CardError::InsufficientRange { .. }))
        ));
    }

    #[test]
    fn test_negative_starting_points_rejected() {
        let config = GameConfig {
            starting_points: -5,
            ..GameConfig::default()
        };
        assert_eq!(
            Game::new(config, 1, Some(1)).unwrap_err(),
            GameError::NegativeStartingPoints(-5)
        );
    }

    #[test]
    fn test_points_overflow_rejected() {
        // pool fits, a balance with both rewards does not
        let config = GameConfig {
            starting_points: 6_000_000_000_000_000_000,
            ..GameConfig::default()
        };
        assert_eq!(
            Game::new(config, 0, Some(1)).unwrap_err(),
            GameError::PointsOverflow {
                starting_points: 6_000_000_000_000_000_000,
                players: 1,
            }
        );

        let config = GameConfig {
            starting_points: 1_000_000_000_000_000_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config, 9, Some(1)),
            Err(GameError::PointsOverflow { players: 10, .. })
        ));
        assert!(matches!(
            Game::new(GameConfig::default(), usize::MAX, Some(1)),
            Err(GameError::PointsOverflow { .. })
        ));
    }

    #[test]
    fn test_large_pool_within_range() {
        let config = GameConfig {
            starting_points: 1_000_000_000_000_000,
            ..GameConfig::default()
        };
        let game = Game::new(config, 4, Some(1)).unwrap();
        assert_eq!(game.pool_total(), 5_000_000_000_000_000);
        assert_eq!(game.ledger().bingo_reward(), 2_500_000_000_000_000);
    }

    #[test]
    fn test_only_current_draw_is_playable() {
        let mut game = Game::new(GameConfig::default(), 2, Some(5)).unwrap();
        assert_eq!(
            game.resolve_human(1, Some(Answer::No), None).unwrap_err(),
            GameError::NotCurrentDraw(1)
        );
        assert_eq!(game.play_bots(1).unwrap_err(), GameError::NotCurrentDraw(1));

        let first = game.draw().unwrap();
        let other = if first == NUMBER_LOW { NUMBER_HIGH } else { NUMBER_LOW };
        assert_eq!(
            game.resolve_human(other, Some(Answer::No), None).unwrap_err(),
            GameError::NotCurrentDraw(other)
        );

        let (answer, claim) = game.human().honest_reply(first);
        game.resolve_human(first, Some(answer), claim).unwrap();
        game.play_bots(first).unwrap();
        let points: Vec<i64> = game.players().iter().map(Player::points).collect();

        assert_eq!(
            game.resolve_human(first, Some(answer), claim).unwrap_err(),
            GameError::TurnAlreadyPlayed(1)
        );
        assert_eq!(game.play_bots(first).unwrap_err(), GameError::TurnAlreadyPlayed(1));

        let second = game.draw().unwrap();
        assert_eq!(game.play_bots(first).unwrap_err(), GameError::NotCurrentDraw(first));
        game.play_bots(second).unwrap();
        assert_eq!(game.human().points(), points[HUMAN_SEAT]);
    }

    #[test]
    fn test_winning_draw_is_the_last_playable() {
        let mut game = Game::new(GameConfig::default(), 0, Some(8)).unwrap();
        let mut last = None;
        while let Some(number) = game.draw() {
            let (answer, claim) = game.human().honest_reply(number);
            game.resolve_human(number, Some(answer), claim).unwrap();
            last = Some(number);
        }
        let last = last.unwrap();

        assert_eq!(game.winner_seat(), Some(HUMAN_SEAT));
        assert_eq!(game.play_bots(last).unwrap(), Vec::new());
        assert_eq!(
            game.resolve_human(last, Some(Answer::Yes), Some(ClaimKind::Bingo))
                .unwrap_err(),
            GameError::TurnAlreadyPlayed(game.turn())
        );
    }

    #[test]
    fn test_no_play_after_exhaustion() {
        let mut game = Game::new(GameConfig::default(), 1, Some(3)).unwrap();
        let mut last = 0;
        while let Some(number) = game.draw() {
            last = number;
        }
        assert!(game.is_exhausted());
        assert_eq!(
            game.resolve_human(last, Some(Answer::No), None).unwrap_err(),
            GameError::GameOver
        );
        assert_eq!(game.play_bots(last).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut game = Game::new(GameConfig::default(), 0, Some(3)).unwrap();
        let mut count = 0;
        while game.draw().is_some() {
            count += 1;
        }
        assert_eq!(count, 90);
        assert_eq!(game.turn(), 90);
        assert!(game.is_exhausted());
        assert!(game.is_over());
        assert_eq!(game.draw(), None);
        assert_eq!(game.summary().outcome, GameOutcome::PoolExhausted);
    }

    #[test]
    fn test_unplayed_game_summary_is_abandoned() {
        let game = Game::new(GameConfig::default(), 1, Some(3)).unwrap();
        let summary = game.summary();
        assert_eq!(summary.outcome, GameOutcome::Abandoned);
        assert_eq!(summary.standings.len(), 2);
        assert_eq!(summary.pool_total, 200);
    }
}
