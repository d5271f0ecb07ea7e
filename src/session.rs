//! Interactive game loop: draw, ask, resolve, let the bots play, repeat.
//!
//! Generic over the prompt reader/writer and the render target so the whole
//! loop runs against in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;

use crate::core::{Game, GameSummary};
use crate::input::{Prompter, Reply};
use crate::term::{
    bot_event_line, draw_header, human_feedback, instructions, summary_lines, CardView, Line,
    TerminalRenderer, Tone,
};
use crate::types::{Answer, ClaimKind, Number};

/// Previous draws listed next to the current one.
pub const RECENT_DRAWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Play the human seat with the honest policy instead of prompting.
    pub autoplay: bool,
    /// Pause after each turn (autoplay only).
    pub delay: Duration,
}

/// Play `game` to the end (or until the player quits) and return the summary.
///
/// The summary is also rendered before returning.
pub fn run<R, W, O>(
    game: &mut Game,
    prompter: &mut Prompter<R, W>,
    renderer: &mut TerminalRenderer<O>,
    options: &SessionOptions,
) -> Result<GameSummary>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    renderer.clear()?;
    renderer.draw(&instructions(game.ledger(), game.players().len()))?;
    let view = CardView::default();

    while let Some(number) = game.draw() {
        let recent = game.drawer().last_draws(RECENT_DRAWS);
        renderer.draw(&[
            Line::new(),
            draw_header(game.turn(), number, &recent, game.drawer().remaining()),
        ])?;

        let human = game.human();
        let title = format!("{} ({} points)", human.name(), human.points());
        renderer.draw(&view.render(
            &title,
            human.card(),
            human.marked(),
            options.autoplay.then_some(number),
        ))?;

        let reply = if options.autoplay {
            let (answer, claim) = game.human().honest_reply(number);
            renderer.draw_line(&autoplay_line(answer, claim))?;
            Some((Some(answer), claim))
        } else {
            ask_human(prompter, renderer, number).context("failed to read player input")?
        };
        let Some((answer, claim)) = reply else {
            debug!("player quit on turn {}", game.turn());
            break;
        };

        let turn = game.resolve_human(number, answer, claim)?;
        renderer.draw(&human_feedback(&turn))?;

        for event in game.play_bots(number)? {
            let name = game.player(event.seat).map_or("?", |p| p.name());
            renderer.draw_line(&bot_event_line(name, &event))?;
        }

        if options.autoplay && !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
    }

    let summary = game.summary();
    renderer.draw(&[Line::new()])?;
    renderer.draw(&summary_lines(&summary))?;
    Ok(summary)
}

/// Ask for the answer and, after a yes, the claim.
///
/// `None` means stop: quitting or closing input at either prompt abandons the
/// game instead of answering "no" to every remaining draw.
fn ask_human<R, W, O>(
    prompter: &mut Prompter<R, W>,
    renderer: &mut TerminalRenderer<O>,
    number: Number,
) -> Result<Option<(Option<Answer>, Option<ClaimKind>)>>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let answer = match prompter.ask_answer(number)? {
        Reply::Value(answer) => answer,
        Reply::Invalid(_) => return Ok(Some((None, None))),
        Reply::Quit | Reply::Eof => return Ok(None),
    };
    if !answer.is_yes() {
        return Ok(Some((Some(answer), None)));
    }

    let claim = match prompter.ask_claim()? {
        Reply::Value(choice) => choice.claim(),
        Reply::Invalid(text) => {
            renderer.draw_line(&Line::styled(
                format!("'{}' is not a claim, skipped.", text),
                Tone::Dim,
            ))?;
            None
        }
        Reply::Quit | Reply::Eof => return Ok(None),
    };
    Ok(Some((Some(answer), claim)))
}

fn autoplay_line(answer: Answer, claim: Option<ClaimKind>) -> Line {
    let mut text = format!(
        "You: {}",
        match answer {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    );
    if let Some(kind) = claim {
        text.push_str(&format!(", claim {}", kind.as_str()));
    }
    Line::styled(text, Tone::Dim)
}
