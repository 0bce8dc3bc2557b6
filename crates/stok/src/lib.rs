//! Reentrant delimiter tokenizer.
//!
//! Splits a byte buffer into tokens: maximal non-empty runs of bytes that are
//! not in a [`DelimSet`]. Consecutive delimiters collapse, so no empty tokens
//! are ever produced.
//!
//! Every [`Tokenizer`] owns its input and its cursor. There is no global
//! state, so any number of tokenizers can be interleaved or moved across
//! threads independently.
//!
//! ```
//! use stok::Tokenizer;
//!
//! let tokens: Vec<Vec<u8>> = Tokenizer::new("This is a test", " ").into_iter().collect();
//! assert_eq!(tokens, [b"This".to_vec(), b"is".to_vec(), b"a".to_vec(), b"test".to_vec()]);
//! ```
//!
//! # Modules
//!
//! - [`delim_set`]: delimiter membership bitmap with a memchr search path
//! - [`cursor`]: bounds-checked forward-only byte cursor
//! - [`tokenizer`]: the tokenizer state machine and iterator adapters

pub mod cursor;
pub mod delim_set;
pub mod tokenizer;

pub use cursor::Cursor;
pub use delim_set::DelimSet;
pub use tokenizer::{split, IntoTokens, Span, Split, Tokenizer, Tokens};

/// Tokenizers hold only owned data and can move between threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tokenizer>();
    assert_send_sync::<Split<'static>>();
};
