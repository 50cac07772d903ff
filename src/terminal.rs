//! Line-based terminal prompter.
//!
//! Reads answers one line at a time and writes prompts and game messages
//! as plain text. Generic over the reader and writer so it can be driven
//! from stdin/stdout or from in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::core::error::PromptError;
use crate::rules::prompt::{GameEvent, Prompter};

/// Prompter over a `BufRead` input and a `Write` output.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line. Bytes that are not UTF-8 are replaced, so a garbled
    /// line is treated like any other malformed answer.
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn request_int(&mut self, min: usize, max: usize, prompt: &str) -> Result<usize, PromptError> {
        loop {
            writeln!(self.output, "{prompt}")?;
            let line = self.read_line()?;
            let Ok(value) = line.trim().parse::<i64>() else {
                writeln!(self.output, "Provided input was not an integer. Please try again.")?;
                continue;
            };
            if value < 0 || (value as u64) < min as u64 {
                writeln!(self.output, "Provided input was less than the minimum. Please try again.")?;
            } else if value as u64 > max as u64 {
                writeln!(self.output, "Provided input was greater than the maximum. Please try again.")?;
            } else {
                return Ok(value as usize);
            }
        }
    }

    fn request_string(&mut self, prompt: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{prompt}")?;
        self.read_line()
    }

    fn notify(&mut self, event: &GameEvent) {
        if let Err(err) = writeln!(self.output, "{event}") {
            warn!(error = %err, "failed to display game event");
        }
    }
}
