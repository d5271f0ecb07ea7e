//! Player module - card, marks, and score for one seat
//!
//! `mark_number` is the ground truth: it only records numbers that are really
//! on the card. What a player *says* about a number is checked against it by
//! the game.

use crate::card::Card;
use crate::claim::{evaluate_claim, is_bingo_complete, is_line_complete};
use crate::ledger::{PlayerStatus, Score};
use crate::types::{Answer, ClaimKind, ClaimOutcome, Number, NumberSet, PlayerKind};

/// What a bot did with one drawn number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTurn {
    pub has_number: bool,
    pub claim: Option<ClaimKind>,
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    card: Card,
    marked: NumberSet,
    score: Score,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, card: Card, points: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            card,
            marked: NumberSet::new(),
            score: Score::new(points),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marked(&self) -> &NumberSet {
        &self.marked
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn points(&self) -> i64 {
        self.score.points
    }

    pub fn has_line(&self) -> bool {
        self.score.has_line
    }

    pub fn has_bingo(&self) -> bool {
        self.score.has_bingo
    }

    pub fn status(&self) -> PlayerStatus {
        self.score.status()
    }

    pub fn has_number(&self, number: Number) -> bool {
        self.card.contains(number)
    }

    /// Mark `number` if it is on the card. Returns whether it was.
    pub fn mark_number(&mut self, number: Number) -> bool {
        if self.has_number(number) {
            self.marked.insert(number);
            true
        } else {
            false
        }
    }

    /// Any full row marked.
    pub fn check_line(&self) -> bool {
        is_line_complete(&self.card, &self.marked)
    }

    /// Whole card marked.
    pub fn check_bingo(&self) -> bool {
        is_bingo_complete(&self.card, &self.marked)
    }

    /// Validate a claim against the current marks and paid rewards.
    pub fn claim_outcome(&self, kind: ClaimKind) -> ClaimOutcome {
        evaluate_claim(kind, &self.card, &self.marked, self.score.awarded(kind))
    }

    /// Honest bot policy for one drawn number.
    ///
    /// Marks truthfully, then claims the first newly completed reward with
    /// bingo checked before line. A bot completing both on one draw claims
    /// bingo only.
    pub fn bot_play_turn(&mut self, number: Number) -> BotTurn {
        let has_number = self.mark_number(number);
        let claim = if has_number {
            honest_claim(&self.card, &self.marked, &self.score)
        } else {
            None
        };
        BotTurn { has_number, claim }
    }

    /// What an honest player would answer and claim for `number`, without
    /// marking anything.
    pub fn honest_reply(&self, number: Number) -> (Answer, Option<ClaimKind>) {
        if !self.has_number(number) {
            return (Answer::No, None);
        }
        let mut marked = self.marked.clone();
        marked.insert(number);
        (Answer::Yes, honest_claim(&self.card, &marked, &self.score))
    }
}

fn honest_claim(card: &Card, marked: &NumberSet, score: &Score) -> Option<ClaimKind> {
    if !score.has_bingo && is_bingo_complete(card, marked) {
        Some(ClaimKind::Bingo)
    } else if !score.has_line && is_line_complete(card, marked) {
        Some(ClaimKind::Line)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(rows: &[[Number; 5]]) -> Player {
        Player::new("P", PlayerKind::Bot, Card::from_rows(rows).unwrap(), 0)
    }

    #[test]
    fn test_line_check() {
        let mut p = player(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14], [20, 21, 22, 23, 24]]);
        for n in [1, 2, 3, 4, 5] {
            assert!(p.mark_number(n));
        }
        assert!(p.check_line());
        assert!(!p.check_bingo());
    }

    #[test]
    fn test_bingo_check() {
        let mut p = player(&[[1, 2, 3, 4, 5], [6, 7, 8, 9, 10], [11, 12, 13, 14, 15]]);
        for n in 1..=15 {
            p.mark_number(n);
        }
        assert!(p.check_bingo());
        assert!(p.check_line());
    }

    #[test]
    fn test_mark_ignores_numbers_off_card() {
        let mut p = player(&[[1, 2, 3, 4, 5]]);
        assert!(!p.mark_number(50));
        assert!(p.marked().is_empty());

        assert!(p.mark_number(3));
        assert!(p.mark_number(3));
        assert_eq!(p.marked().len(), 1);
    }

    #[test]
    fn test_bot_claims_line_once() {
        let mut p = player(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14]]);
        for n in [1, 2, 3, 4] {
            assert_eq!(
                p.bot_play_turn(n),
                BotTurn {
                    has_number: true,
                    claim: None
                }
            );
        }
        assert_eq!(p.bot_play_turn(5).claim, Some(ClaimKind::Line));

        // Line paid; the next number on the card should not re-claim it.
        p.score_mut().has_line = true;
        assert_eq!(p.bot_play_turn(10).claim, None);
    }

    #[test]
    fn test_bot_prefers_bingo_over_line() {
        let mut p = player(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14]]);
        for n in [1, 2, 3, 4, 10, 11, 12, 13, 14] {
            p.mark_number(n);
        }
        // 5 completes row 0 and the whole card at once.
        let turn = p.bot_play_turn(5);
        assert_eq!(turn.claim, Some(ClaimKind::Bingo));
        assert!(!p.has_line());
    }

    #[test]
    fn test_bot_no_claim_without_number() {
        let mut p = player(&[[1, 2, 3, 4, 5]]);
        for n in [1, 2, 3, 4, 5] {
            p.mark_number(n);
        }
        // Already complete, but the drawn number is not on the card.
        assert_eq!(
            p.bot_play_turn(60),
            BotTurn {
                has_number: false,
                claim: None
            }
        );
    }

    #[test]
    fn test_claim_outcome_tracks_awards() {
        let mut p = player(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14]]);
        assert_eq!(p.claim_outcome(ClaimKind::Line), ClaimOutcome::False);

        for n in [1, 2, 3, 4, 5] {
            p.mark_number(n);
        }
        assert_eq!(p.claim_outcome(ClaimKind::Line), ClaimOutcome::Valid);

        p.score_mut().has_line = true;
        assert_eq!(
            p.claim_outcome(ClaimKind::Line),
            ClaimOutcome::AlreadyAwarded
        );
        assert_eq!(p.status(), PlayerStatus::LineAwarded);
    }

    #[test]
    fn test_honest_reply_does_not_mark() {
        let mut p = player(&[[1, 2, 3, 4, 5]]);
        for n in [1, 2, 3, 4] {
            p.mark_number(n);
        }
        assert_eq!(p.honest_reply(9), (Answer::No, None));
        assert_eq!(p.honest_reply(5), (Answer::Yes, Some(ClaimKind::Bingo)));
        assert_eq!(p.marked().len(), 4);
    }
}
