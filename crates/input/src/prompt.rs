//! Prompt/read loop over any line reader and writer.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::map::{is_quit, parse_answer, parse_claim, parse_difficulty, ClaimChoice};
use crate::types::{Answer, Difficulty, Number};

/// One read from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    /// The line could not be understood (trimmed text kept for feedback).
    Invalid(String),
    Quit,
    /// Input closed.
    Eof,
}

impl<T> Reply<T> {
    /// Quit or end of input.
    pub fn is_stop(&self) -> bool {
        matches!(self, Reply::Quit | Reply::Eof)
    }
}

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// "Do you have `number`?"
    pub fn ask_answer(&mut self, number: Number) -> io::Result<Reply<Answer>> {
        let prompt = format!("Do you have {}? [y/n, q to quit] ", number);
        self.ask(&prompt, parse_answer)
    }

    /// "Claim line or bingo?" Only asked after a yes.
    pub fn ask_claim(&mut self) -> io::Result<Reply<ClaimChoice>> {
        self.ask("Claim? [l]ine / [b]ingo / Enter for none ", parse_claim)
    }

    /// Difficulty menu; repeats until a valid choice, quit, or end of input.
    pub fn ask_difficulty(&mut self) -> io::Result<Reply<Difficulty>> {
        loop {
            let reply = self.ask(
                "Choose difficulty: 1) easy  2) medium  3) hard ",
                parse_difficulty,
            )?;
            match reply {
                Reply::Invalid(text) => {
                    writeln!(self.writer, "'{}' is not a valid choice.", text)?;
                }
                other => return Ok(other),
            }
        }
    }

    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> io::Result<Reply<T>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(Reply::Eof);
        }
        let text = self.line.trim();
        debug!("read {:?}", text);

        if is_quit(text) {
            return Ok(Reply::Quit);
        }
        Ok(match parse(text) {
            Some(value) => Reply::Value(value),
            None => Reply::Invalid(text.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClaimKind;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_answer_replies() {
        let mut p = prompter("y\nmaybe\nq\n");
        assert_eq!(p.ask_answer(7).unwrap(), Reply::Value(Answer::Yes));
        assert_eq!(
            p.ask_answer(8).unwrap(),
            Reply::Invalid("maybe".to_string())
        );
        assert_eq!(p.ask_answer(9).unwrap(), Reply::Quit);
        assert_eq!(p.ask_answer(10).unwrap(), Reply::Eof);

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Do you have 7?"));
        assert!(out.contains("Do you have 10?"));
    }

    #[test]
    fn test_claim_replies() {
        let mut p = prompter("b\n\n");
        assert_eq!(
            p.ask_claim().unwrap(),
            Reply::Value(ClaimChoice::Claim(ClaimKind::Bingo))
        );
        assert_eq!(p.ask_claim().unwrap(), Reply::Value(ClaimChoice::NoClaim));
    }

    #[test]
    fn test_difficulty_retries() {
        let mut p = prompter("9\nfoo\n2\n");
        assert_eq!(
            p.ask_difficulty().unwrap(),
            Reply::Value(Difficulty::Medium)
        );
        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("not a valid choice").count(), 2);
    }

    #[test]
    fn test_difficulty_eof() {
        let mut p = prompter("");
        assert!(p.ask_difficulty().unwrap().is_stop());
    }
}
