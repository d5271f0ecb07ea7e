//! TerminalRenderer: flushes styled lines to a terminal (or any writer).
//!
//! Lines are encoded into a reusable byte buffer first and written in one go,
//! so a turn's output never interleaves with the next prompt.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::line::{Line, Tone};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    colored: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Colored stdout renderer.
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), true)
    }

    /// Stdout renderer; color is off when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let colored = std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty());
        Self::with_writer(io::stdout(), colored)
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, colored: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            colored,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Draw lines below whatever is already on screen.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, &mut self.buf, self.colored)?;
        self.flush_buf()
    }

    pub fn draw_line(&mut self, line: &Line) -> Result<()> {
        self.draw(std::slice::from_ref(line))
    }

    /// Clear the screen and home the cursor. No-op without color, so piped
    /// output stays free of escape codes.
    pub fn clear(&mut self) -> Result<()> {
        if !self.colored {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode `lines` into `out`, one `\n` per line.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// With `colored` false the output is plain text.
pub fn encode_lines_into(lines: &[Line], out: &mut Vec<u8>, colored: bool) -> Result<()> {
    for line in lines {
        for span in &line.spans {
            match tone_style(span.tone).filter(|_| colored) {
                Some((color, bold)) => {
                    out.queue(SetForegroundColor(color))?;
                    if bold {
                        out.queue(SetAttribute(Attribute::Bold))?;
                    }
                    out.queue(Print(&span.text))?;
                    out.queue(ResetColor)?;
                    out.queue(SetAttribute(Attribute::Reset))?;
                }
                None => {
                    out.queue(Print(&span.text))?;
                }
            }
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn tone_style(tone: Tone) -> Option<(Color, bool)> {
    match tone {
        Tone::Plain => None,
        Tone::Heading => Some((Color::Cyan, true)),
        Tone::Dim => Some((Color::DarkGrey, false)),
        Tone::Marked => Some((Color::Green, false)),
        Tone::Complete => Some((Color::Yellow, true)),
        Tone::Drawn => Some((Color::Magenta, true)),
        Tone::Good => Some((Color::Green, true)),
        Tone::Bad => Some((Color::Red, false)),
    }
}
