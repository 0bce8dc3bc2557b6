//! The delimiter tokenizer state machine and its iterator adapters.
//!
//! A token is a maximal non-empty run of non-delimiter bytes. Runs of
//! delimiters collapse, so the tokenizer never yields an empty token, and
//! leading or trailing delimiters produce nothing.
//!
//! # States
//!
//! ```text
//!   Scanning ──(no bytes left after skipping delimiters)──▶ Exhausted
//!      ▲  │
//!      └──┘ yield token
//! ```
//!
//! `Exhausted` is terminal: every later call returns `None` without touching
//! the buffer.
//!
//! # Ownership
//!
//! [`Tokenizer`] owns its input and a copy of its delimiter set. Tokens are
//! spans into that owned buffer, so nothing is written into the input to mark
//! token boundaries and no two tokenizers share state. [`split`] offers the
//! same scan over a borrowed buffer without copying.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::{Cursor, DelimSet};

/// Byte range of a token within the tokenizer's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    Exhausted,
}

/// Scan position shared by the owning tokenizer and the borrowing adapters.
#[derive(Clone, Copy, Debug)]
struct Scan {
    pos: usize,
    state: State,
}

impl Scan {
    const fn new() -> Self {
        Self {
            pos: 0,
            state: State::Scanning,
        }
    }

    /// Advance past the next token in `buf` and return its span.
    fn next_span(&mut self, buf: &[u8], delims: &DelimSet) -> Option<Span> {
        if self.state == State::Exhausted {
            return None;
        }

        let mut cursor = Cursor::at(buf, self.pos);
        cursor.eat_delimiters(delims);
        if cursor.is_eof() {
            self.pos = cursor.pos();
            self.state = State::Exhausted;
            return None;
        }

        let start = cursor.pos();
        let stopped_on_delimiter = cursor.eat_until_delimiter(delims).is_some();
        let span = Span::new(start, cursor.pos());
        if stopped_on_delimiter {
            cursor.advance();
        }
        self.pos = cursor.pos();
        Some(span)
    }

    /// Upper bound on tokens left in `buf`: each needs one byte, and every
    /// pair is separated by at least one delimiter.
    fn max_remaining(&self, buf: &[u8]) -> usize {
        match self.state {
            State::Exhausted => 0,
            State::Scanning => (buf.len() - self.pos).div_ceil(2),
        }
    }
}

/// Reentrant delimiter tokenizer over an owned input buffer.
///
/// # Example
///
/// ```
/// use stok::Tokenizer;
///
/// let mut tok = Tokenizer::new("This,is,;another;,,,test;", ",;");
/// assert_eq!(tok.next_token(), Some(&b"This"[..]));
/// assert_eq!(tok.next_token(), Some(&b"is"[..]));
/// assert_eq!(tok.next_token(), Some(&b"another"[..]));
/// assert_eq!(tok.next_token(), Some(&b"test"[..]));
/// assert_eq!(tok.next_token(), None);
/// assert_eq!(tok.next_token(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer {
    input: Box<[u8]>,
    delims: DelimSet,
    scan: Scan,
}

impl Tokenizer {
    /// Create a tokenizer that owns `input` and a copy of `delimiters`.
    ///
    /// Borrowed inputs (`&str`, `&[u8]`) are copied; owned ones (`String`,
    /// `Vec<u8>`) are moved in. An empty delimiter set is legal: the whole
    /// input becomes a single token.
    pub fn new(input: impl Into<Vec<u8>>, delimiters: impl Into<DelimSet>) -> Self {
        Self {
            input: input.into().into_boxed_slice(),
            delims: delimiters.into(),
            scan: Scan::new(),
        }
    }

    /// Next token as a slice of the owned input, or `None` once exhausted.
    pub fn next_token(&mut self) -> Option<&[u8]> {
        let span = self.scan.next_span(&self.input, &self.delims)?;
        Some(&self.input[span.range()])
    }

    /// Next token as a [`Span`] into [`input()`](Self::input).
    pub fn next_span(&mut self) -> Option<Span> {
        self.scan.next_span(&self.input, &self.delims)
    }

    /// Lazy iterator over the remaining tokens.
    ///
    /// The iterator drives this tokenizer's own cursor: dropping it early
    /// leaves the tokenizer positioned after the last token it yielded.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            input: &self.input,
            delims: &self.delims,
            scan: &mut self.scan,
        }
    }

    /// Bytes of `span`, or `None` if it lies outside the input.
    pub fn resolve(&self, span: Span) -> Option<&[u8]> {
        self.input.get(span.range())
    }

    /// Returns `true` once the tokenizer has reported the end of its input.
    pub fn is_exhausted(&self) -> bool {
        self.scan.state == State::Exhausted
    }

    /// Current cursor offset. Never decreases.
    pub fn pos(&self) -> usize {
        self.scan.pos
    }

    /// The unscanned suffix of the input.
    pub fn remaining(&self) -> &[u8] {
        &self.input[self.scan.pos..]
    }

    /// The whole owned input.
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn delimiters(&self) -> &DelimSet {
        &self.delims
    }

    /// Release the owned input buffer.
    pub fn into_input(self) -> Vec<u8> {
        self.input.into_vec()
    }
}

impl IntoIterator for Tokenizer {
    type Item = Vec<u8>;
    type IntoIter = IntoTokens;

    fn into_iter(self) -> IntoTokens {
        IntoTokens { tokenizer: self }
    }
}

/// Iterator borrowing a [`Tokenizer`], created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    input: &'a [u8],
    delims: &'a DelimSet,
    scan: &'a mut Scan,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let span = self.scan.next_span(self.input, self.delims)?;
        Some(&self.input[span.range()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.scan.max_remaining(self.input)))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Owning iterator yielding each token as a `Vec<u8>`.
#[derive(Clone, Debug)]
pub struct IntoTokens {
    tokenizer: Tokenizer,
}

impl IntoTokens {
    /// The tokenizer being drained.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl Iterator for IntoTokens {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        self.tokenizer.next_token().map(<[u8]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let tok = &self.tokenizer;
        (0, Some(tok.scan.max_remaining(&tok.input)))
    }
}

impl FusedIterator for IntoTokens {}

/// Tokenize a borrowed buffer without copying it.
///
/// ```
/// let words: Vec<&[u8]> = stok::split(b"This is a test", " ").collect();
/// assert_eq!(words, vec![&b"This"[..], &b"is"[..], &b"a"[..], &b"test"[..]]);
/// ```
pub fn split(input: &[u8], delimiters: impl Into<DelimSet>) -> Split<'_> {
    Split {
        input,
        delims: delimiters.into(),
        scan: Scan::new(),
    }
}

/// Iterator over the tokens of a borrowed buffer, created by [`split`].
#[derive(Clone, Debug)]
pub struct Split<'a> {
    input: &'a [u8],
    delims: DelimSet,
    scan: Scan,
}

impl Split<'_> {
    /// Span of the next token, advancing the iterator.
    pub fn next_span(&mut self) -> Option<Span> {
        self.scan.next_span(self.input, &self.delims)
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let span = self.scan.next_span(self.input, &self.delims)?;
        Some(&self.input[span.range()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.scan.max_remaining(self.input)))
    }
}

impl FusedIterator for Split<'_> {}
