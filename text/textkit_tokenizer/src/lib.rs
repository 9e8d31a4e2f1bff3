//! Configurable lexical tokenizer over a copied character buffer.
//!
//! Splits input into an ordered token list according to four pluggable
//! [`StrMatcher`] slots (delimiter, quote, ignored, trimmer) plus two
//! empty-token policies, then exposes the result through a bidirectional
//! [`TokenCursor`].
//!
//! The scan is single-pass and non-recursive: quoting suspends delimiter
//! matching (with doubled-quote escapes), ignored text is elided outside
//! quotes, and the trimmer strips token edges. This is splitting, not
//! grammar parsing -- there is no nested-structure awareness beyond quotes.
//!
//! ```
//! use textkit_tokenizer::{StrMatcher, StrTokenizer};
//!
//! let mut tok = StrTokenizer::with_delim_and_quote(
//!     "a:'b''c'",
//!     StrMatcher::char_matcher(':'),
//!     StrMatcher::single_quote_matcher(),
//! );
//! assert_eq!(tok.next_token().and_then(|t| t.as_str()), Some("a"));
//! assert_eq!(tok.next_token().and_then(|t| t.as_str()), Some("b'c"));
//! assert!(tok.next_token().is_none());
//! ```

mod cursor;
mod matcher;
mod tokenizer;

pub use cursor::{CursorError, TokenCursor};
pub use matcher::StrMatcher;
pub use tokenizer::{StrTokenizer, Token};
