//! Line-oriented prompts over any reader and writer.
//!
//! End of input is reported as `None` by [`Console::ask`] and as "no" by
//! [`Console::confirm`]. A closed stdin therefore always ends a session.

use std::io::{self, BufRead, Write};

/// A prompt/response channel.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for writing tables and messages.
    pub const fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and reads one line, trimmed of surrounding whitespace.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the reply fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks a yes/no question. Only `yes` (in either case) counts as yes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the reply fails.
    pub fn confirm(&mut self, prompt: &str, yes: char) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|reply| is_yes(&reply, yes)))
    }

    /// Asks for a numbered menu option.
    ///
    /// Returns `Ok(None)` at end of input and `Ok(Some(None))` when the reply
    /// is not a number.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the reply fails.
    pub fn choose(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        Ok(self.ask(prompt)?.map(|reply| reply.parse().ok()))
    }
}

/// Whether `reply` is the single letter `yes`, ignoring case.
#[must_use]
pub fn is_yes(reply: &str, yes: char) -> bool {
    let mut chars = reply.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.to_lowercase().eq(yes.to_lowercase())
    )
}
