//! Forward-only cursor over a byte buffer.
//!
//! The cursor never moves backwards and never reads past the end of the
//! buffer it was created over: every read goes through a bounds-checked
//! accessor, and EOF is simply `pos == buf.len()`. Interior `0x00` bytes are
//! ordinary content.

use crate::DelimSet;

/// Forward-only cursor over a borrowed byte buffer.
///
/// The cursor is [`Copy`], so a scan can work on a local copy and commit the
/// final position back to its owner.
///
/// # Invariant
///
/// `pos <= buf.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a cursor resuming at `pos`, clamped to the end of `buf`.
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        debug_assert!(
            pos <= buf.len(),
            "cursor position {pos} exceeds buffer length {}",
            buf.len()
        );
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed suffix.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Bytes from `start` up to the current position.
    ///
    /// # Contract
    ///
    /// `start <= pos()`. Holds whenever `start` was read from this cursor
    /// (or a copy of it) earlier in the scan.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds cursor {}", self.pos);
        &self.buf[start..self.pos]
    }

    /// Advance while `pred` holds for the current byte. Stops at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip the whole run of delimiter bytes at the cursor.
    ///
    /// Leaves the cursor on the first non-delimiter byte, or at EOF.
    pub fn eat_delimiters(&mut self, delims: &DelimSet) {
        match delims.find_not(self.remaining()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.buf.len(),
        }
    }

    /// Advance to the next delimiter byte or EOF.
    ///
    /// Returns the delimiter found, or `None` if the cursor ran to EOF.
    /// Small delimiter sets are searched with memchr.
    pub fn eat_until_delimiter(&mut self, delims: &DelimSet) -> Option<u8> {
        if let Some(offset) = delims.find(self.remaining()) {
            self.pos += offset;
            self.current()
        } else {
            self.pos = self.buf.len();
            None
        }
    }
}
