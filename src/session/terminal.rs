//! Line-buffered text terminal: prompts, keys, numbers, names.

use std::io::{self, Write};

use super::input::{InputHandler, InputSource, KeyDisposition, PromptKeys};
use super::SessionError;

/// Reads from an `InputSource`, writes to any `Write`.
///
/// Output methods never fail; the first write error is kept and surfaced by
/// `take_error`.
pub struct Terminal<I, W> {
    input: I,
    output: W,
    exit_key: char,
    write_error: Option<io::Error>,
}

impl<I: InputSource, W: Write> Terminal<I, W> {
    pub fn new(input: I, output: W, exit_key: char) -> Self {
        Self {
            input,
            output,
            exit_key,
            write_error: None,
        }
    }

    /// Consume the terminal, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text without a line break.
    pub fn write(&mut self, text: &str) {
        let result = self.output.write_all(text.as_bytes()).and_then(|()| self.output.flush());
        self.record(result);
    }

    /// Write text followed by a line break.
    pub fn line(&mut self, text: &str) {
        let result = writeln!(self.output, "{text}");
        self.record(result);
    }

    pub fn blank_line(&mut self) {
        self.line("");
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.write_error.get_or_insert(err);
        }
    }

    /// Return the first write error since the last call, if any.
    pub fn take_error(&mut self) -> Result<(), SessionError> {
        match self.write_error.take() {
            Some(err) => Err(SessionError::Io(err)),
            None => Ok(()),
        }
    }

    fn next_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        self.input.read_line()?.ok_or(SessionError::EndOfInput)
    }

    /// Read keystrokes until `handler` accepts one.
    pub fn read_key(&mut self, handler: &mut dyn InputHandler) -> Result<char, SessionError> {
        loop {
            let line = self.next_line()?;
            for key in line.chars() {
                match handler.handle_key(key) {
                    KeyDisposition::Accept(key) => return Ok(key),
                    KeyDisposition::Exit => return Err(SessionError::Exit),
                    KeyDisposition::Ignore => {}
                }
            }
        }
    }

    /// Read one of `keys` (case-insensitive); the exit key leaves.
    pub fn read_one_of(&mut self, keys: &[char]) -> Result<char, SessionError> {
        let mut handler = PromptKeys::new(keys, self.exit_key);
        self.read_key(&mut handler)
    }

    /// Ask a yes/no question.
    pub fn yes_or_no(&mut self, question: &str) -> Result<bool, SessionError> {
        self.write(&format!("{question} (Y/N) "));
        Ok(self.read_one_of(&['Y', 'N'])? == 'Y')
    }

    /// Read a whole line; a line starting with the exit key leaves.
    pub fn read_text(&mut self) -> Result<String, SessionError> {
        let line = self.next_line()?;
        if line.starts_with(self.exit_key) {
            return Err(SessionError::Exit);
        }
        Ok(line)
    }

    /// Read an integer in `minimum..=maximum`, re-prompting until valid.
    pub fn read_integer_in_range(&mut self, minimum: usize, maximum: usize) -> Result<usize, SessionError> {
        assert!(minimum <= maximum, "minimum must not exceed maximum");
        loop {
            let text = self.read_text()?;
            match text.trim().parse::<usize>() {
                Ok(value) if (minimum..=maximum).contains(&value) => return Ok(value),
                _ => self.write(&format!("Enter a number between {minimum} and {maximum}: ")),
            }
        }
    }
}
