//! Ledger module - point rewards and penalties
//!
//! Point policy:
//! - Wrong yes/no confirmation costs `wrong_answer_penalty` (1).
//! - A false or repeated line/bingo claim costs `false_claim_penalty` (3).
//! - A valid line pays `line_reward_bp` of the pool total (10%), floored.
//! - A valid bingo pays `bingo_reward_bp` of the pool total (50%), floored.
//!
//! The ledger pays whatever it is asked to pay. Checking `has_line` /
//! `has_bingo` before calling an award is the caller's job.

use log::info;

use crate::types::{
    ClaimKind, ClaimOutcome, BASIS_POINTS, BINGO_REWARD_BP, FALSE_CLAIM_PENALTY, LINE_REWARD_BP,
    WRONG_ANSWER_PENALTY,
};

/// Point values for each scored event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub wrong_answer_penalty: i64,
    pub false_claim_penalty: i64,
    /// Line reward in basis points of the pool total.
    pub line_reward_bp: u32,
    /// Bingo reward in basis points of the pool total.
    pub bingo_reward_bp: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            wrong_answer_penalty: WRONG_ANSWER_PENALTY,
            false_claim_penalty: FALSE_CLAIM_PENALTY,
            line_reward_bp: LINE_REWARD_BP,
            bingo_reward_bp: BINGO_REWARD_BP,
        }
    }
}

/// Where a player stands with respect to the one-shot rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Playing,
    LineAwarded,
    BingoAwarded,
}

/// A player's running balance and paid-reward flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub points: i64,
    pub has_line: bool,
    pub has_bingo: bool,
}

impl Score {
    pub fn new(points: i64) -> Self {
        Self {
            points,
            has_line: false,
            has_bingo: false,
        }
    }

    /// Whether the reward for `kind` was already paid.
    pub fn awarded(&self, kind: ClaimKind) -> bool {
        match kind {
            ClaimKind::Line => self.has_line,
            ClaimKind::Bingo => self.has_bingo,
        }
    }

    /// Bingo is terminal; a line alone leaves the player still playing for bingo.
    pub fn status(&self) -> PlayerStatus {
        if self.has_bingo {
            PlayerStatus::BingoAwarded
        } else if self.has_line {
            PlayerStatus::LineAwarded
        } else {
            PlayerStatus::Playing
        }
    }
}

/// `basis_points` of `pool_total`, floored. Saturates at the `i64` bounds.
pub fn share_of_pool(pool_total: i64, basis_points: u32) -> i64 {
    let share = (i128::from(pool_total) * i128::from(basis_points))
        .div_euclid(i128::from(BASIS_POINTS));
    i64::try_from(share).unwrap_or(if share < 0 { i64::MIN } else { i64::MAX })
}

/// Applies the point policy against a fixed pool total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLedger {
    pool_total: i64,
    rules: ScoringRules,
}

impl ScoreLedger {
    pub fn new(pool_total: i64, rules: ScoringRules) -> Self {
        Self { pool_total, rules }
    }

    pub fn pool_total(&self) -> i64 {
        self.pool_total
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn line_reward(&self) -> i64 {
        share_of_pool(self.pool_total, self.rules.line_reward_bp)
    }

    pub fn bingo_reward(&self) -> i64 {
        share_of_pool(self.pool_total, self.rules.bingo_reward_bp)
    }

    pub fn reward_for(&self, kind: ClaimKind) -> i64 {
        match kind {
            ClaimKind::Line => self.line_reward(),
            ClaimKind::Bingo => self.bingo_reward(),
        }
    }

    /// Charge a wrong yes/no confirmation. Returns the (negative) delta.
    pub fn penalize_wrong_answer(&self, score: &mut Score) -> i64 {
        let delta = self.rules.wrong_answer_penalty.saturating_neg();
        score.points = score.points.saturating_add(delta);
        delta
    }

    /// Charge a false or repeated claim. Returns the (negative) delta.
    pub fn penalize_false_claim(&self, score: &mut Score) -> i64 {
        let delta = self.rules.false_claim_penalty.saturating_neg();
        score.points = score.points.saturating_add(delta);
        delta
    }

    /// Pay the line reward and set `has_line`. Returns the reward.
    pub fn award_line(&self, score: &mut Score) -> i64 {
        let reward = self.line_reward();
        score.points = score.points.saturating_add(reward);
        score.has_line = true;
        reward
    }

    /// Pay the bingo reward and set `has_bingo`. Returns the reward.
    pub fn award_bingo(&self, score: &mut Score) -> i64 {
        let reward = self.bingo_reward();
        score.points = score.points.saturating_add(reward);
        score.has_bingo = true;
        reward
    }

    /// Apply the result of a validated claim: pay on `Valid`, penalise otherwise.
    ///
    /// Returns the point delta.
    pub fn settle_claim(&self, kind: ClaimKind, outcome: ClaimOutcome, score: &mut Score) -> i64 {
        let delta = match (outcome, kind) {
            (ClaimOutcome::Valid, ClaimKind::Line) => self.award_line(score),
            (ClaimOutcome::Valid, ClaimKind::Bingo) => self.award_bingo(score),
            (ClaimOutcome::False | ClaimOutcome::AlreadyAwarded, _) => {
                self.penalize_false_claim(score)
            }
        };
        info!(
            "{} claim {}: {:+} points (now {})",
            kind.as_str(),
            outcome.as_str(),
            delta,
            score.points
        );
        delta
    }
}
