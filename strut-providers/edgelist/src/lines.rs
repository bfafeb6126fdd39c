//! Line reader that skips blank lines and tracks 1-based line numbers.
use std::io::{self, BufRead};

pub(crate) struct ContentLines<R> {
    reader: R,
    buffer: String,
    line: usize,
}

impl<R: BufRead> ContentLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line: 0,
        }
    }

    /// Returns the next non-blank line, trimmed, with its line number, or
    /// `None` at end of input.
    pub(crate) fn next_content(&mut self) -> io::Result<Option<(usize, &str)>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if !self.buffer.trim().is_empty() {
                return Ok(Some((self.line, self.buffer.trim())));
            }
        }
    }
}
