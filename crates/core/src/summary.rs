//! End-of-game summary handed to the display layer.

use crate::types::PlayerKind;

/// How the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player was awarded bingo.
    Bingo { seat: usize, name: String },
    /// Every number was drawn without a bingo.
    PoolExhausted,
    /// Stopped before either of the above.
    Abandoned,
}

impl GameOutcome {
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            GameOutcome::Bingo { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// One player's final line in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub seat: usize,
    pub name: String,
    pub kind: PlayerKind,
    pub points: i64,
    pub has_line: bool,
    pub has_bingo: bool,
    /// Numbers marked on the card.
    pub marked: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub turns: u32,
    pub pool_total: i64,
    /// Seat order.
    pub standings: Vec<Standing>,
}

impl GameSummary {
    /// Highest balance; the lowest seat wins ties.
    pub fn leader(&self) -> Option<&Standing> {
        self.standings
            .iter()
            .reduce(|best, s| if s.points > best.points { s } else { best })
    }

    /// Standings sorted by points, highest first (stable on seat order).
    pub fn ranked(&self) -> Vec<&Standing> {
        let mut ranked: Vec<_> = self.standings.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }
}
