//! Input plumbing for the text session.
//!
//! Input arrives as lines from an `InputSource`. Every character of a line
//! is a keystroke, and the session asks an `InputHandler` what each
//! keystroke means. Handlers are passed into each prompt explicitly, so
//! there is no shared "key pressed" event to subscribe to.

use std::io::{self, BufRead};

use smallvec::SmallVec;

/// Line-oriented input.
pub trait InputSource {
    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any `BufRead`, e.g. locked stdin.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// What a keystroke means to the prompt reading it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The prompt is answered with this key.
    Accept(char),
    /// Not meaningful here; keep reading.
    Ignore,
    /// Leave the session.
    Exit,
}

/// Decides what each keystroke means.
pub trait InputHandler {
    fn handle_key(&mut self, key: char) -> KeyDisposition;
}

/// Accepts one of a few keys, case-insensitively, and maps the exit key to
/// `Exit`. Accepted keys are reported as configured.
#[derive(Clone, Debug)]
pub struct PromptKeys {
    accepted: SmallVec<[char; 4]>,
    exit_key: char,
}

impl PromptKeys {
    pub fn new(accepted: &[char], exit_key: char) -> Self {
        Self {
            accepted: accepted.iter().copied().collect(),
            exit_key,
        }
    }
}

impl InputHandler for PromptKeys {
    fn handle_key(&mut self, key: char) -> KeyDisposition {
        if key == self.exit_key {
            return KeyDisposition::Exit;
        }
        self.accepted
            .iter()
            .find(|accepted| accepted.eq_ignore_ascii_case(&key))
            .map_or(KeyDisposition::Ignore, |&accepted| KeyDisposition::Accept(accepted))
    }
}
