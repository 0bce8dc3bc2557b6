//! Delimiter byte sets.
//!
//! A [`DelimSet`] answers one question: is this byte a delimiter? Membership
//! is a 256-bit bitmap, so lookups cost the same whether the set holds one
//! byte or two hundred.
//!
//! # Search Fast Path
//!
//! Most delimiter sets are tiny (a space, or `,;`). The first three distinct
//! members are remembered in insertion order so that [`DelimSet::find`] can
//! hand small sets to `memchr`/`memchr2`/`memchr3` for SIMD-accelerated search.
//! Larger sets fall back to a bitmap scan.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of distinct members eligible for the memchr fast path.
const NEEDLES: usize = 3;

/// Set of delimiter bytes.
///
/// Duplicate bytes are ignored on insertion. Equality and hashing consider
/// membership only, never insertion order.
#[derive(Clone, Copy)]
pub struct DelimSet {
    /// One bit per byte value: bit `b & 63` of word `b >> 6`.
    bits: [u64; 4],
    /// First `NEEDLES` distinct members in insertion order.
    needles: [u8; NEEDLES],
    /// Number of distinct members (0..=256).
    count: u16,
}

/// Size assertion: bitmap (32) + needles (3) + count (2), padded to 40.
const _: () = assert!(std::mem::size_of::<DelimSet>() <= 40);

/// The bytes C's `isspace` accepts in the "C" locale.
const WHITESPACE: DelimSet = DelimSet::from_bytes(b" \t\n\x0B\x0C\r");

impl DelimSet {
    /// Create an empty set. An empty set never matches.
    pub const fn new() -> Self {
        Self {
            bits: [0; 4],
            needles: [0; NEEDLES],
            count: 0,
        }
    }

    /// Build a set from a byte slice. Repeated bytes are harmless.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// The whitespace-class set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
    pub const fn whitespace() -> Self {
        WHITESPACE
    }

    /// Returns a copy of `self` with `byte` added.
    const fn with(mut self, byte: u8) -> Self {
        let word = (byte >> 6) as usize;
        let bit = 1u64 << (byte & 63);
        if self.bits[word] & bit != 0 {
            return self;
        }
        self.bits[word] |= bit;
        if (self.count as usize) < NEEDLES {
            self.needles[self.count as usize] = byte;
        }
        self.count += 1;
        self
    }

    /// Add `byte` to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, byte: u8) -> bool {
        let added = !self.contains(byte);
        *self = self.with(byte);
        added
    }

    /// Returns `true` if `byte` is a member.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Number of distinct members.
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// Returns `true` if the set has no members.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }

    /// Offset of the first member byte in `haystack`, or `None`.
    ///
    /// Sets of one to three members use memchr; anything larger scans the
    /// bitmap byte by byte.
    #[inline]
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        let [a, b, c] = self.needles;
        match self.count {
            0 => None,
            1 => memchr::memchr(a, haystack),
            2 => memchr::memchr2(a, b, haystack),
            3 => memchr::memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|&byte| self.contains(byte)),
        }
    }

    /// Offset of the first byte in `haystack` that is NOT a member, or `None`.
    #[inline]
    pub fn find_not(&self, haystack: &[u8]) -> Option<usize> {
        haystack.iter().position(|&byte| !self.contains(byte))
    }
}

/// Bitmap-only search. Reference implementation for property testing the
/// memchr fast path in [`DelimSet::find`].
#[cfg(test)]
fn scalar_find(set: &DelimSet, haystack: &[u8]) -> Option<usize> {
    haystack.iter().position(|&byte| set.contains(byte))
}

impl Default for DelimSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DelimSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for DelimSet {}

impl Hash for DelimSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Debug for DelimSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

impl From<&[u8]> for DelimSet {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for DelimSet {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for DelimSet {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<&str> for DelimSet {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<u8> for DelimSet {
    fn from(byte: u8) -> Self {
        Self::new().with(byte)
    }
}

impl FromIterator<u8> for DelimSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for DelimSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            *self = self.with(byte);
        }
    }
}
