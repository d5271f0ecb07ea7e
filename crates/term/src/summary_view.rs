//! Text for everything around the card: rules, draws, feedback, final standings.

use crate::core::{BotEvent, GameOutcome, GameSummary, HumanTurn, ScoreLedger};
use crate::line::{Line, Tone};
use crate::types::{Answer, ClaimKind, ClaimOutcome, Number};

/// Rules shown once before the first draw.
pub fn instructions(ledger: &ScoreLedger, players: usize) -> Vec<Line> {
    let rules = ledger.rules();
    vec![
        Line::styled("BINGO", Tone::Heading),
        Line::plain(format!(
            "{} players, pool of {} points.",
            players,
            ledger.pool_total()
        )),
        Line::plain("Each turn a number is drawn. Answer whether it is on your card."),
        Line::plain(format!(
            "  wrong answer: -{}   false or repeated claim: -{}",
            rules.wrong_answer_penalty, rules.false_claim_penalty
        )),
        Line::plain(format!(
            "  line: +{}   bingo: +{} (ends the game)",
            ledger.line_reward(),
            ledger.bingo_reward()
        )),
        Line::styled("Type q to quit at any prompt.", Tone::Dim),
    ]
}

/// "Turn 12: 45" followed by the previous few draws.
pub fn draw_header(turn: u32, number: Number, recent: &[Number], remaining: usize) -> Line {
    let mut line =
        Line::plain(format!("Turn {}: ", turn)).with(format!("{:>2}", number), Tone::Drawn);
    if !recent.is_empty() {
        let previous: Vec<String> = recent.iter().map(|n| n.to_string()).collect();
        line.push(format!("   previous: {}", previous.join(" ")), Tone::Dim);
    }
    line.push(format!("   ({} left)", remaining), Tone::Dim);
    line
}

/// What happened to the human seat this turn.
pub fn human_feedback(turn: &HumanTurn) -> Vec<Line> {
    let mut lines = Vec::new();

    match turn.answer {
        None if turn.on_card => lines.push(Line::styled(
            format!(
                "Invalid answer, counted as no. You missed {}: {}",
                turn.number, turn.answer_delta
            ),
            Tone::Bad,
        )),
        None => lines.push(Line::styled(
            format!("Invalid answer, counted as no: {}", turn.answer_delta),
            Tone::Bad,
        )),
        Some(answer) if !turn.answer_correct() => {
            let text = match answer {
                Answer::Yes => {
                    format!("{} is not on your card: {}", turn.number, turn.answer_delta)
                }
                Answer::No => format!("You missed {}: {}", turn.number, turn.answer_delta),
            };
            lines.push(Line::styled(text, Tone::Bad));
        }
        Some(_) if turn.marked => {
            lines.push(Line::styled(format!("Marked {}.", turn.number), Tone::Good));
        }
        Some(_) => {}
    }

    if let Some(claim) = turn.claim {
        let kind = claim_name(claim.kind);
        let line = match claim.outcome {
            ClaimOutcome::Valid => {
                Line::styled(format!("{}! {:+} points", kind, claim.delta), Tone::Good)
            }
            ClaimOutcome::False => Line::styled(
                format!("No {} on your card: {}", kind.to_lowercase(), claim.delta),
                Tone::Bad,
            ),
            ClaimOutcome::AlreadyAwarded => Line::styled(
                format!("{} was already paid: {}", kind, claim.delta),
                Tone::Bad,
            ),
        };
        lines.push(line);
    }

    lines
}

pub fn bot_event_line(name: &str, event: &BotEvent) -> Line {
    let tone = match event.kind {
        ClaimKind::Line => Tone::Plain,
        ClaimKind::Bingo => Tone::Heading,
    };
    Line::styled(
        format!(
            "{} calls {}! {:+} (now {})",
            name,
            claim_name(event.kind).to_uppercase(),
            event.reward,
            event.points
        ),
        tone,
    )
}

/// Outcome line plus one row per player, highest balance first.
pub fn summary_lines(summary: &GameSummary) -> Vec<Line> {
    let mut lines = vec![Line::styled("GAME OVER", Tone::Heading)];

    let outcome = match &summary.outcome {
        GameOutcome::Bingo { name, .. } => {
            Line::styled(format!("{} won with bingo on turn {}.", name, summary.turns), Tone::Good)
        }
        GameOutcome::PoolExhausted => Line::plain(format!(
            "All {} numbers drawn. Nobody got bingo.",
            summary.turns
        )),
        GameOutcome::Abandoned => {
            Line::styled(format!("Game stopped after {} turns.", summary.turns), Tone::Dim)
        }
    };
    lines.push(outcome);
    lines.push(Line::styled(
        format!("Pool: {} points", summary.pool_total),
        Tone::Dim,
    ));

    for (rank, s) in summary.ranked().into_iter().enumerate() {
        let mut flags = Vec::new();
        if s.has_line {
            flags.push("line");
        }
        if s.has_bingo {
            flags.push("bingo");
        }
        let text = format!(
            "{:>2}. {:<8} {:>6}  marked {:>2}  {}",
            rank + 1,
            s.name,
            s.points,
            s.marked,
            flags.join(" ")
        );
        let tone = if s.has_bingo { Tone::Good } else { Tone::Plain };
        lines.push(Line::styled(text.trim_end(), tone));
    }

    lines
}

fn claim_name(kind: ClaimKind) -> &'static str {
    match kind {
        ClaimKind::Line => "Line",
        ClaimKind::Bingo => "Bingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClaimResult, ScoringRules, Standing};
    use crate::types::PlayerKind;

    fn turn(on_card: bool, answer: Option<Answer>, answer_delta: i64) -> HumanTurn {
        HumanTurn {
            number: 42,
            on_card,
            answer,
            answer_delta,
            marked: on_card && answer == Some(Answer::Yes),
            claim: None,
        }
    }

    #[test]
    fn instructions_show_rewards() {
        let ledger = ScoreLedger::new(500, ScoringRules::default());
        let text: Vec<String> = instructions(&ledger, 5).iter().map(Line::text).collect();
        assert!(text.iter().any(|t| t.contains("pool of 500")));
        assert!(text.iter().any(|t| t.contains("line: +50") && t.contains("bingo: +250")));
    }

    #[test]
    fn header_lists_previous_draws() {
        let line = draw_header(3, 7, &[12, 80], 87);
        assert_eq!(line.text(), "Turn 3:  7   previous: 12 80   (87 left)");
        assert_eq!(draw_header(1, 50, &[], 89).text(), "Turn 1: 50   (89 left)");
    }

    #[test]
    fn feedback_for_answers() {
        assert_eq!(human_feedback(&turn(true, Some(Answer::Yes), 0))[0].text(), "Marked 42.");
        assert!(human_feedback(&turn(false, Some(Answer::No), 0)).is_empty());
        assert_eq!(
            human_feedback(&turn(true, Some(Answer::No), -1))[0].text(),
            "You missed 42: -1"
        );
        assert_eq!(
            human_feedback(&turn(false, Some(Answer::Yes), -1))[0].text(),
            "42 is not on your card: -1"
        );
        assert_eq!(
            human_feedback(&turn(false, None, -1))[0].text(),
            "Invalid answer, counted as no: -1"
        );
        assert_eq!(
            human_feedback(&turn(true, None, -2))[0].text(),
            "Invalid answer, counted as no. You missed 42: -2"
        );
    }

    #[test]
    fn feedback_for_claims() {
        let mut t = turn(true, Some(Answer::Yes), 0);
        t.claim = Some(ClaimResult {
            kind: ClaimKind::Line,
            outcome: ClaimOutcome::False,
            delta: -3,
        });
        let lines = human_feedback(&t);
        assert_eq!(lines[1].text(), "No line on your card: -3");
        assert_eq!(lines[1].spans[0].tone, Tone::Bad);

        t.claim = Some(ClaimResult {
            kind: ClaimKind::Bingo,
            outcome: ClaimOutcome::Valid,
            delta: 250,
        });
        assert_eq!(human_feedback(&t)[1].text(), "Bingo! +250 points");
    }

    #[test]
    fn bot_event_text() {
        let event = BotEvent {
            seat: 2,
            kind: ClaimKind::Line,
            reward: 50,
            points: 150,
        };
        assert_eq!(bot_event_line("Bot-2", &event).text(), "Bot-2 calls LINE! +50 (now 150)");
    }

    #[test]
    fn summary_ranks_players() {
        let standing = |seat: usize, name: &str, points: i64, has_bingo: bool| Standing {
            seat,
            name: name.to_string(),
            kind: if seat == 0 { PlayerKind::Human } else { PlayerKind::Bot },
            points,
            has_line: has_bingo,
            has_bingo,
            marked: 15,
        };
        let summary = GameSummary {
            outcome: GameOutcome::Bingo {
                seat: 1,
                name: "Bot-1".to_string(),
            },
            turns: 61,
            pool_total: 200,
            standings: vec![standing(0, "You", 98, false), standing(1, "Bot-1", 170, true)],
        };

        let text: Vec<String> = summary_lines(&summary).iter().map(Line::text).collect();
        assert_eq!(text[1], "Bot-1 won with bingo on turn 61.");
        assert!(text[3].contains("Bot-1") && text[3].ends_with("line bingo"));
        assert!(text[4].contains("You"));
    }
}
