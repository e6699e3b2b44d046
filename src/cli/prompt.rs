//! Yes/no confirmation before conflicting values are overwritten.

use crate::error::PrefsError;
use std::io::{BufRead, IsTerminal, Write};

/// Asks the user a single yes/no question. Anything but an explicit yes is a no.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PrefsError>;
}

/// Only `y` or `Y` (ignoring the line terminator) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

/// Interactive terminal prompt (dialoguer), defaulting to No.
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PrefsError> {
        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(false)
            .wait_for_newline(true)
            .interact()
            .map_err(|e| PrefsError::Prompt(e.to_string()))
    }
}

/// Line-oriented prompt for piped input.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, PrefsError> {
        write!(self.writer, "{} (y/N)? ", question)
            .and_then(|_| self.writer.flush())
            .map_err(|e| PrefsError::Prompt(e.to_string()))?;

        let mut answer = String::new();
        let read = self
            .reader
            .read_line(&mut answer)
            .map_err(|e| PrefsError::Prompt(e.to_string()))?;
        if read == 0 {
            // EOF: nothing typed.
            writeln!(self.writer).map_err(|e| PrefsError::Prompt(e.to_string()))?;
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }
}

/// Always answers yes (`--force`).
pub struct ForcedPrompt;

impl ConfirmPrompt for ForcedPrompt {
    fn confirm(&mut self, _question: &str) -> Result<bool, PrefsError> {
        Ok(true)
    }
}

/// Terminal prompt when stdin is a TTY, line prompt otherwise.
///
/// Both write the question to stderr so stdout only carries the run output.
pub fn default_prompt(force: bool) -> Box<dyn ConfirmPrompt> {
    if force {
        return Box::new(ForcedPrompt);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        Box::new(TerminalPrompt)
    } else {
        Box::new(LinePrompt::new(stdin.lock(), std::io::stderr()))
    }
}
