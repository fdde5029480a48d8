//! Validated prompts for the interactive menu.
//!
//! Each prompt blocks until it gets acceptable input or the operator
//! backs out. Backing out is a value, [`Prompted::Back`], which the calling
//! flow turns into an early return.

use std::io::{BufRead, Write};

use bookstock::MAX_QTY;

use crate::error::CliError;

/// Token that abandons the current flow, matched case-insensitively.
pub const BACK_TOKEN: &str = "back";

/// Outcome of a field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    /// The operator entered a valid value.
    Value(T),
    /// The operator typed `back`, or input ended.
    Back,
}

/// Parses a book id made only of ASCII digits.
///
/// Signs, spaces, decimal points and values too large for `i64` are
/// rejected.
pub fn parse_book_id(input: &str) -> Option<i64> {
    parse_digits(input)
}

fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits<T: std::str::FromStr>(input: &str) -> Option<T> {
    if !is_digits(input) {
        return None;
    }
    input.parse().ok()
}

/// Reads operator input and writes prompts and messages.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream for messages that are not prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` as-is and reads one trimmed line.
    ///
    /// Returns `None` once input has ended.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when stdin closes mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_field(&mut self, prompt: &str) -> Result<Prompted<String>, CliError> {
        let answer = self.ask(&format!(
            "{prompt} (enter \"{BACK_TOKEN}\" to return to the menu): "
        ))?;
        Ok(match answer {
            Some(text) if !text.eq_ignore_ascii_case(BACK_TOKEN) => Prompted::Value(text),
            _ => Prompted::Back,
        })
    }

    /// Asks until a non-blank answer is given.
    ///
    /// `field` names the value in the error shown for blank answers.
    pub fn text(&mut self, prompt: &str, field: &str) -> Result<Prompted<String>, CliError> {
        loop {
            match self.ask_field(prompt)? {
                Prompted::Value(text) if text.is_empty() => {
                    writeln!(
                        self.output,
                        "Error: {field} cannot be empty. Please try again."
                    )?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Asks until the answer is a whole number of copies.
    ///
    /// Digit strings above [`MAX_QTY`] are refused as too large rather
    /// than as not being numbers.
    pub fn quantity(&mut self, prompt: &str) -> Result<Prompted<u64>, CliError> {
        loop {
            let Prompted::Value(text) = self.ask_field(prompt)? else {
                return Ok(Prompted::Back);
            };
            match parse_digits::<u64>(&text) {
                Some(qty) if qty <= MAX_QTY => return Ok(Prompted::Value(qty)),
                _ if is_digits(&text) => writeln!(
                    self.output,
                    "Error: Quantity is too large. Please try again."
                )?,
                _ => writeln!(
                    self.output,
                    "Error: Quantity must be a number. Please try again."
                )?,
            }
        }
    }
}
