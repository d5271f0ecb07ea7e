//! Claim evaluation - pure checks of a card against a set of numbers
//!
//! Every function here is side-effect free. Because drawn and marked sets only
//! grow during a game, a condition that holds once keeps holding.

use arrayvec::ArrayVec;

use crate::card::Card;
use crate::types::{ClaimKind, ClaimOutcome, NumberSet, MAX_CARD_ROWS};

/// True if at least one row has every cell in `drawn`.
pub fn is_line_complete(card: &Card, drawn: &NumberSet) -> bool {
    card.iter_rows()
        .any(|row| row.iter().all(|n| drawn.contains(n)))
}

/// True if every cell of the card is in `drawn`.
pub fn is_bingo_complete(card: &Card, drawn: &NumberSet) -> bool {
    card.numbers().iter().all(|n| drawn.contains(n))
}

/// Indices of all rows whose cells are all in `drawn`, top to bottom.
pub fn complete_rows(card: &Card, drawn: &NumberSet) -> ArrayVec<usize, MAX_CARD_ROWS> {
    let mut rows = ArrayVec::new();
    for (idx, row) in card.iter_rows().enumerate() {
        if row.iter().all(|n| drawn.contains(n)) {
            rows.push(idx);
        }
    }
    rows
}

/// Whether `kind` currently holds for the card.
pub fn is_complete(kind: ClaimKind, card: &Card, drawn: &NumberSet) -> bool {
    match kind {
        ClaimKind::Line => is_line_complete(card, drawn),
        ClaimKind::Bingo => is_bingo_complete(card, drawn),
    }
}

/// Validate a claim of `kind`.
///
/// A claim for a reward that was already paid is reported as
/// [`ClaimOutcome::AlreadyAwarded`] regardless of the card state.
pub fn evaluate_claim(
    kind: ClaimKind,
    card: &Card,
    marked: &NumberSet,
    already_awarded: bool,
) -> ClaimOutcome {
    if already_awarded {
        ClaimOutcome::AlreadyAwarded
    } else if is_complete(kind, card, marked) {
        ClaimOutcome::Valid
    } else {
        ClaimOutcome::False
    }
}
