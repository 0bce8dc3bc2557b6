//! Word list to `\newcommand` conversion.
//!
//! Input is processed line by line. Whitespace anywhere in a line is
//! discarded, so `  foo bar ` reads as `foobar`. After that:
//!
//! - an empty line is ignored
//! - a line starting with the marker (`:` by default) replaces the prefix
//!   with the rest of the line
//! - any other line is a word `w`, emitted as
//!   `\newcommand{\<prefix>w}{\texttt{w}}`
//!
//! The prefix carries over from one file to the next.

use std::io::{self, Write};
use std::path::Path;

use stok::DelimSet;

use crate::{KwgenConfig, KwgenError};

/// Stateful line processor. One instance spans all files of a run.
#[derive(Clone, Debug)]
pub struct MacroGenerator {
    prefix: Vec<u8>,
    marker: u8,
    max_prefix: usize,
    emitted: usize,
}

impl MacroGenerator {
    pub fn new(config: &KwgenConfig) -> Self {
        MacroGenerator {
            prefix: Vec::new(),
            marker: config.marker,
            max_prefix: config.max_prefix,
            emitted: 0,
        }
    }

    /// The prefix prepended to every macro name.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Number of macros written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Read `path` and process each of its lines.
    pub fn process_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<(), KwgenError> {
        let source = std::fs::read(path).map_err(|err| KwgenError::read(path, err))?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "processing word list");
        self.process_source(&source, out)?;
        Ok(())
    }

    /// Process every line of `source`. A final line without `\n` still counts.
    pub fn process_source<W: Write>(&mut self, source: &[u8], out: &mut W) -> io::Result<()> {
        for line in stok::split(source, b'\n') {
            self.process_line(line, out)?;
        }
        Ok(())
    }

    /// Process a single line (without its newline).
    pub fn process_line<W: Write>(&mut self, line: &[u8], out: &mut W) -> io::Result<()> {
        let word = normalize_line(line);
        match word.split_first() {
            None => Ok(()),
            Some((&first, rest)) if first == self.marker => {
                self.set_prefix(rest);
                Ok(())
            }
            Some(_) => self.emit(&word, out),
        }
    }

    fn set_prefix(&mut self, prefix: &[u8]) {
        let keep = prefix.len().min(self.max_prefix);
        if keep < prefix.len() {
            tracing::warn!(
                len = prefix.len(),
                max = self.max_prefix,
                "prefix truncated"
            );
        }
        self.prefix.clear();
        self.prefix.extend_from_slice(&prefix[..keep]);
        tracing::debug!(prefix = %String::from_utf8_lossy(&self.prefix), "prefix set");
    }

    fn emit<W: Write>(&mut self, word: &[u8], out: &mut W) -> io::Result<()> {
        tracing::trace!(word = %String::from_utf8_lossy(word), "emitting macro");
        out.write_all(b"\\newcommand{\\")?;
        out.write_all(&self.prefix)?;
        out.write_all(word)?;
        out.write_all(b"}{\\texttt{")?;
        out.write_all(word)?;
        out.write_all(b"}}\n")?;
        self.emitted += 1;
        Ok(())
    }
}

/// Remove every whitespace-class byte from `line`.
pub fn normalize_line(line: &[u8]) -> Vec<u8> {
    stok::split(line, DelimSet::whitespace())
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
mod tests;
