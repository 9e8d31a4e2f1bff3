//! Tokenizer engine: configuration, the single-pass scan, and lifecycle.
//!
//! [`StrTokenizer`] owns an immutable snapshot of the input (copied in,
//! never aliased to caller memory), four matcher slots, and two
//! empty-token policies. The token list is computed lazily and cached:
//! every configuration mutator bumps a generation counter, and any
//! token-reading accessor rescans when the cached generation is stale.
//! The cache carries its own [`TokenCursor`], so a rescan always restarts
//! traversal before the first token.
//!
//! # Scan semantics
//!
//! At each position, precedence is: ignored/trimmer skip at token start,
//! then delimiter, then quote, then ignored, then trimmer, then plain
//! copy. A quote opens a quoted region only when it matches at token
//! start; inside quotes, delimiters and ignored text are copied verbatim
//! and a doubled occurrence of the literal opening sequence unescapes to
//! one copy. Ignored text is elided only outside quoted regions. An
//! unterminated quote absorbs the remainder of the input -- not an error.

use std::fmt;

use tracing::trace;

use crate::cursor::{CursorError, TokenCursor};
use crate::matcher::StrMatcher;

/// One token of a scan: either string content or the null-token marker.
///
/// `Null` is distinct from `Text(String::new())`: it is produced only
/// when the `empty_token_as_null` policy substitutes an empty token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Ordinary (possibly empty) string content.
    Text(String),
    /// The designated "no value" marker for an empty token.
    Null,
}

impl Token {
    /// Build a text token.
    pub fn text(content: impl Into<String>) -> Self {
        Token::Text(content.into())
    }

    /// String content, or `None` for the null-token marker.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            Token::Null => None,
        }
    }

    /// `true` for the null-token marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Token::Null)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => f.write_str(s),
            Token::Null => f.write_str("null"),
        }
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Token::Text(s) if s == other)
    }
}

/// Cached scan result, valid only for the generation it was computed at.
#[derive(Clone, Debug)]
struct ScanCache {
    generation: u64,
    cursor: TokenCursor,
}

/// Configurable tokenizer over a copied character buffer.
///
/// Not safe for concurrent use without external synchronization: all
/// methods are ordinary synchronous calls over the instance's own buffer,
/// configuration, cache, and cursor.
#[derive(Debug)]
pub struct StrTokenizer {
    /// Input snapshot; `None` is the valid "no content" state.
    content: Option<Vec<char>>,
    delim: StrMatcher,
    quote: StrMatcher,
    ignored: StrMatcher,
    trimmer: StrMatcher,
    /// Drop empty tokens entirely (evaluated before null substitution).
    ignore_empty_tokens: bool,
    /// Emit [`Token::Null`] for empty tokens that survive the drop policy.
    empty_token_as_null: bool,
    /// Bumped by every mutator; the cache is stale when it disagrees.
    generation: u64,
    cache: Option<ScanCache>,
}

impl Default for StrTokenizer {
    fn default() -> Self {
        Self {
            content: None,
            delim: StrMatcher::split_matcher(),
            quote: StrMatcher::none_matcher(),
            ignored: StrMatcher::none_matcher(),
            trimmer: StrMatcher::none_matcher(),
            ignore_empty_tokens: true,
            empty_token_as_null: false,
            generation: 0,
            cache: None,
        }
    }
}

impl From<&str> for StrTokenizer {
    fn from(content: &str) -> Self {
        let mut tok = Self::new();
        tok.reset_content(Some(content));
        tok
    }
}

impl StrTokenizer {
    /// Tokenizer with no content and default configuration: whitespace
    /// delimiter, no quote, no ignored, no trimmer, empty tokens dropped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer over `content` with an explicit delimiter matcher.
    pub fn with_delim(content: &str, delim: StrMatcher) -> Self {
        let mut tok = Self::from(content);
        tok.set_delim_matcher(Some(delim));
        tok
    }

    /// Tokenizer over `content` with explicit delimiter and quote matchers.
    pub fn with_delim_and_quote(content: &str, delim: StrMatcher, quote: StrMatcher) -> Self {
        let mut tok = Self::with_delim(content, delim);
        tok.set_quote_matcher(Some(quote));
        tok
    }

    /// Empty CSV-style tokenizer: comma delimiter, double-quote quoting,
    /// whitespace trimming, empty tokens kept.
    pub fn csv() -> Self {
        let mut tok = Self::new();
        tok.set_delim_matcher(Some(StrMatcher::comma_matcher()))
            .set_quote_matcher(Some(StrMatcher::double_quote_matcher()))
            .set_trimmer_matcher(Some(StrMatcher::trim_matcher()))
            .set_empty_token_as_null(false)
            .set_ignore_empty_tokens(false);
        tok
    }

    /// CSV-style tokenizer bound to `content`. See [`csv()`](Self::csv).
    pub fn csv_of(content: &str) -> Self {
        let mut tok = Self::csv();
        tok.reset_content(Some(content));
        tok
    }

    /// Empty TSV-style tokenizer: tab delimiter, otherwise as CSV.
    pub fn tsv() -> Self {
        let mut tok = Self::csv();
        tok.set_delim_matcher(Some(StrMatcher::tab_matcher()));
        tok
    }

    /// TSV-style tokenizer bound to `content`. See [`tsv()`](Self::tsv).
    pub fn tsv_of(content: &str) -> Self {
        let mut tok = Self::tsv();
        tok.reset_content(Some(content));
        tok
    }

    // === Configuration ===

    /// Set the delimiter matcher; `None` restores the whitespace default.
    pub fn set_delim_matcher(&mut self, matcher: Option<StrMatcher>) -> &mut Self {
        self.delim = matcher.unwrap_or_else(StrMatcher::split_matcher);
        self.invalidate()
    }

    /// Set a single-character delimiter.
    pub fn set_delim_char(&mut self, ch: char) -> &mut Self {
        self.set_delim_matcher(Some(StrMatcher::char_matcher(ch)))
    }

    /// Set a literal-string delimiter.
    pub fn set_delim_string(&mut self, literal: &str) -> &mut Self {
        self.set_delim_matcher(Some(StrMatcher::string_matcher(literal)))
    }

    /// Set the quote matcher; `None` restores the no-quoting default.
    pub fn set_quote_matcher(&mut self, matcher: Option<StrMatcher>) -> &mut Self {
        self.quote = matcher.unwrap_or_else(StrMatcher::none_matcher);
        self.invalidate()
    }

    /// Set a single-character quote.
    pub fn set_quote_char(&mut self, ch: char) -> &mut Self {
        self.set_quote_matcher(Some(StrMatcher::char_matcher(ch)))
    }

    /// Set the ignored matcher; `None` restores the nothing-ignored default.
    pub fn set_ignored_matcher(&mut self, matcher: Option<StrMatcher>) -> &mut Self {
        self.ignored = matcher.unwrap_or_else(StrMatcher::none_matcher);
        self.invalidate()
    }

    /// Set a single ignored character.
    pub fn set_ignored_char(&mut self, ch: char) -> &mut Self {
        self.set_ignored_matcher(Some(StrMatcher::char_matcher(ch)))
    }

    /// Set a literal-string ignored sequence.
    pub fn set_ignored_string(&mut self, literal: &str) -> &mut Self {
        self.set_ignored_matcher(Some(StrMatcher::string_matcher(literal)))
    }

    /// Set the trimmer matcher; `None` restores the no-trimming default.
    pub fn set_trimmer_matcher(&mut self, matcher: Option<StrMatcher>) -> &mut Self {
        self.trimmer = matcher.unwrap_or_else(StrMatcher::none_matcher);
        self.invalidate()
    }

    /// Drop empty tokens entirely. Takes precedence over null substitution.
    pub fn set_ignore_empty_tokens(&mut self, ignore: bool) -> &mut Self {
        self.ignore_empty_tokens = ignore;
        self.invalidate()
    }

    /// Emit [`Token::Null`] instead of `""` for empty tokens.
    pub fn set_empty_token_as_null(&mut self, as_null: bool) -> &mut Self {
        self.empty_token_as_null = as_null;
        self.invalidate()
    }

    /// The configured delimiter matcher.
    pub fn delim_matcher(&self) -> &StrMatcher {
        &self.delim
    }

    /// The configured quote matcher.
    pub fn quote_matcher(&self) -> &StrMatcher {
        &self.quote
    }

    /// The configured ignored matcher.
    pub fn ignored_matcher(&self) -> &StrMatcher {
        &self.ignored
    }

    /// The configured trimmer matcher.
    pub fn trimmer_matcher(&self) -> &StrMatcher {
        &self.trimmer
    }

    /// Whether empty tokens are dropped.
    pub fn ignores_empty_tokens(&self) -> bool {
        self.ignore_empty_tokens
    }

    /// Whether surviving empty tokens become [`Token::Null`].
    pub fn empty_token_as_null(&self) -> bool {
        self.empty_token_as_null
    }

    // === Lifecycle ===

    /// Drop the cached token list and return the cursor to before-first.
    /// The bound content is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.invalidate()
    }

    /// Rebind the input buffer (an owned copy of `content`), drop the
    /// cache, and return the cursor to before-first. `None` is valid and
    /// produces an empty tokenizer.
    pub fn reset_content(&mut self, content: Option<&str>) -> &mut Self {
        self.content = content.map(|s| s.chars().collect());
        self.invalidate()
    }

    /// Independent copy: configuration and policies by value, its own
    /// copy of the bound buffer, and a fresh cursor/cache. Mutating
    /// either instance afterwards never affects the other.
    pub fn duplicate(&self) -> Self {
        Self {
            content: self.content.clone(),
            delim: self.delim.clone(),
            quote: self.quote.clone(),
            ignored: self.ignored.clone(),
            trimmer: self.trimmer.clone(),
            ignore_empty_tokens: self.ignore_empty_tokens,
            empty_token_as_null: self.empty_token_as_null,
            generation: 0,
            cache: None,
        }
    }

    // === Token access ===

    /// The bound content as a string, or `None` when no content is bound.
    pub fn content(&self) -> Option<String> {
        self.content.as_ref().map(|chars| chars.iter().collect())
    }

    /// Number of tokens, scanning first if needed.
    pub fn size(&mut self) -> usize {
        self.ensure_tokenized().size()
    }

    /// Borrowed view of the token list (scanning first if needed).
    ///
    /// The view aliases internal state and rejects structural mutation by
    /// construction; use [`token_list`](Self::token_list) for a detached
    /// copy that can be mutated freely.
    pub fn tokens(&mut self) -> &[Token] {
        self.ensure_tokenized().tokens()
    }

    /// Detached copy of the token list. Mutating the returned `Vec` never
    /// affects the tokenizer.
    pub fn token_list(&mut self) -> Vec<Token> {
        self.tokens().to_vec()
    }

    /// `true` if forward traversal has tokens left.
    pub fn has_next(&mut self) -> bool {
        self.ensure_tokenized().has_next()
    }

    /// `true` if backward traversal has tokens left.
    pub fn has_previous(&mut self) -> bool {
        self.ensure_tokenized().has_previous()
    }

    /// Consume and return the next token, failing at the end boundary.
    #[allow(
        clippy::should_implement_trait,
        reason = "bidirectional cursor with Result-based bounds, not an Iterator"
    )]
    pub fn next(&mut self) -> Result<&Token, CursorError> {
        self.ensure_tokenized().next()
    }

    /// Step back and return the previous token, failing at the start
    /// boundary.
    pub fn previous(&mut self) -> Result<&Token, CursorError> {
        self.ensure_tokenized().previous()
    }

    /// Consume and return the next token, or `None` at the end boundary.
    pub fn next_token(&mut self) -> Option<&Token> {
        self.ensure_tokenized().next_token()
    }

    /// Step back and return the previous token, or `None` at the start
    /// boundary.
    pub fn previous_token(&mut self) -> Option<&Token> {
        self.ensure_tokenized().previous_token()
    }

    /// Index the next `next` call would return, without moving.
    pub fn next_index(&mut self) -> usize {
        self.ensure_tokenized().next_index()
    }

    /// Index the next `previous` call would return; `None` before the
    /// first token.
    pub fn previous_index(&mut self) -> Option<usize> {
        self.ensure_tokenized().previous_index()
    }

    /// Absolute peek at token `index`, independent of cursor position.
    pub fn get(&mut self, index: usize) -> Option<&Token> {
        self.ensure_tokenized().get(index)
    }

    // === Scan ===

    fn invalidate(&mut self) -> &mut Self {
        self.generation += 1;
        self
    }

    /// Rescan if no cache exists or the cached generation is stale, then
    /// hand out the cursor over the cached token list.
    fn ensure_tokenized(&mut self) -> &mut TokenCursor {
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|c| c.generation == self.generation);
        if !fresh {
            let tokens = self.scan();
            trace!(
                tokens = tokens.len(),
                generation = self.generation,
                "scanned input buffer"
            );
            self.cache = Some(ScanCache {
                generation: self.generation,
                cursor: TokenCursor::new(tokens),
            });
        }
        match self.cache.as_mut() {
            Some(cache) => &mut cache.cursor,
            None => unreachable!("cache populated above"),
        }
    }

    /// One full scan of the bound buffer. Empty or absent content yields
    /// zero tokens without running any finalize step.
    fn scan(&self) -> Vec<Token> {
        match &self.content {
            Some(chars) if !chars.is_empty() => self.tokenize(chars, 0, chars.len()),
            _ => Vec::new(),
        }
    }

    /// Split `chars[range_start..range_end]` into tokens.
    fn tokenize(&self, chars: &[char], range_start: usize, range_end: usize) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = range_start;
        while pos < range_end {
            match self.read_next_token(chars, pos, range_end, &mut tokens) {
                None => break,
                Some(next) => {
                    if next >= range_end {
                        // A trailing delimiter yields one trailing empty token.
                        self.push_token(&mut tokens, String::new());
                    }
                    pos = next;
                }
            }
        }
        tokens
    }

    /// Read one token starting at `start`, appending it to `tokens`
    /// (subject to the empty-token policies).
    ///
    /// Returns the position after the consumed delimiter, or `None` when
    /// the token ran to the end of the range.
    fn read_next_token(
        &self,
        chars: &[char],
        mut start: usize,
        range_end: usize,
        tokens: &mut Vec<Token>,
    ) -> Option<usize> {
        // Strip leading ignored/trimmer runs, unless the position is a
        // delimiter or quote (those must be seen by the main scan).
        while start < range_end {
            let remove = self
                .ignored
                .matches(chars, start, start, range_end)
                .max(self.trimmer.matches(chars, start, start, range_end));
            if remove == 0
                || self.delim.matches(chars, start, start, range_end) > 0
                || self.quote.matches(chars, start, start, range_end) > 0
            {
                break;
            }
            start += remove;
        }

        if start >= range_end {
            self.push_token(tokens, String::new());
            return None;
        }

        // A delimiter at token start means an empty token.
        let delim_len = self.delim.matches(chars, start, start, range_end);
        if delim_len > 0 {
            self.push_token(tokens, String::new());
            return Some(start + delim_len);
        }

        // A quote at token start opens a quoted region.
        let quote_len = self.quote.matches(chars, start, start, range_end);
        if quote_len > 0 {
            return self.read_with_quotes(
                chars,
                start + quote_len,
                range_end,
                tokens,
                start,
                quote_len,
            );
        }
        self.read_with_quotes(chars, start, range_end, tokens, 0, 0)
    }

    /// Accumulate one token, switching between quoted and plain mode
    /// until an unquoted delimiter or the end of the range.
    ///
    /// `quote_start`/`quote_len` locate the literal opening quote
    /// sequence in `chars` (`quote_len == 0` when the token did not start
    /// with a quote). Closing and re-opening compare against that literal
    /// sequence, so a quote set matching both `'` and `"` never closes a
    /// `'`-opened region with a `"`.
    fn read_with_quotes(
        &self,
        chars: &[char],
        start: usize,
        range_end: usize,
        tokens: &mut Vec<Token>,
        quote_start: usize,
        quote_len: usize,
    ) -> Option<usize> {
        let mut work: Vec<char> = Vec::new();
        // Everything up to the watermark is kept; trailing trimmer
        // matches accumulate above it and are cut at finalize.
        let mut trim_watermark = 0;
        let mut pos = start;
        let mut quoting = quote_len > 0;

        while pos < range_end {
            if quoting {
                if Self::is_quote(chars, pos, range_end, quote_start, quote_len) {
                    if Self::is_quote(chars, pos + quote_len, range_end, quote_start, quote_len) {
                        // Doubled quote: one literal copy, stay quoted.
                        work.extend_from_slice(&chars[pos..pos + quote_len]);
                        pos += quote_len * 2;
                        trim_watermark = work.len();
                        continue;
                    }
                    quoting = false;
                    pos += quote_len;
                    continue;
                }
                // Inside quotes everything is literal, delimiters and
                // ignored text included.
                work.push(chars[pos]);
                pos += 1;
                trim_watermark = work.len();
            } else {
                let delim_len = self.delim.matches(chars, pos, start, range_end);
                if delim_len > 0 {
                    work.truncate(trim_watermark);
                    self.push_token(tokens, work.into_iter().collect());
                    return Some(pos + delim_len);
                }

                if quote_len > 0 && Self::is_quote(chars, pos, range_end, quote_start, quote_len) {
                    quoting = true;
                    pos += quote_len;
                    continue;
                }

                let ignored_len = self.ignored.matches(chars, pos, start, range_end);
                if ignored_len > 0 {
                    pos += ignored_len;
                    continue;
                }

                // Trimmer matches are copied but do not advance the
                // watermark: interior runs survive, trailing runs are cut.
                let trimmed_len = self.trimmer.matches(chars, pos, start, range_end);
                if trimmed_len > 0 {
                    work.extend_from_slice(&chars[pos..pos + trimmed_len]);
                    pos += trimmed_len;
                    continue;
                }

                work.push(chars[pos]);
                pos += 1;
                trim_watermark = work.len();
            }
        }

        // End of range: an unterminated quote has absorbed the remainder.
        work.truncate(trim_watermark);
        self.push_token(tokens, work.into_iter().collect());
        None
    }

    /// `true` when the literal opening quote sequence occurs at `pos`.
    fn is_quote(
        chars: &[char],
        pos: usize,
        range_end: usize,
        quote_start: usize,
        quote_len: usize,
    ) -> bool {
        if quote_len == 0 || pos + quote_len > range_end {
            return false;
        }
        chars[pos..pos + quote_len] == chars[quote_start..quote_start + quote_len]
    }

    /// Apply the empty-token policies and append: empty tokens are
    /// dropped first, then null-substituted, in that order.
    fn push_token(&self, tokens: &mut Vec<Token>, content: String) {
        if content.is_empty() {
            if self.ignore_empty_tokens {
                return;
            }
            if self.empty_token_as_null {
                tokens.push(Token::Null);
                return;
            }
        }
        tokens.push(Token::Text(content));
    }
}

impl fmt::Display for StrTokenizer {
    /// Renders the cached token list, or an explicit marker when no
    /// current scan exists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cache {
            Some(cache) if cache.generation == self.generation => {
                f.write_str("StrTokenizer[")?;
                for (i, token) in cache.cursor.tokens().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{token}")?;
                }
                f.write_str("]")
            }
            _ => f.write_str("StrTokenizer[not tokenized yet]"),
        }
    }
}
