//! Character matchers: the pluggable rules driving the tokenizer scan.
//!
//! A matcher answers one question: given a buffer, a position, and the
//! valid range, how many characters starting at that position satisfy the
//! rule? Zero means "no match, consume nothing". Matchers are stateless
//! and never read outside `[range_start, range_end)`.
//!
//! The built-in rules form a closed set of variants; user-defined rules
//! plug in through [`StrMatcher::custom`], which carries the full match
//! contract rather than a per-character predicate so multi-character
//! rules remain expressible.

use std::fmt;
use std::sync::Arc;

/// Match function for user-supplied rules. Same contract as
/// [`StrMatcher::matches`].
type MatchFn = dyn Fn(&[char], usize, usize, usize) -> usize + Send + Sync;

/// A rule reporting how many characters at a buffer position satisfy it.
///
/// Construct via the factory methods (`char_matcher`, `string_matcher`,
/// `trim_matcher`, ...). Matchers are cheap to clone; the tokenizer
/// copies them by value when duplicated.
#[derive(Clone)]
pub struct StrMatcher {
    kind: MatcherKind,
}

#[derive(Clone)]
enum MatcherKind {
    /// Exact single character.
    Char(char),
    /// Any character of a fixed set (sorted for binary search).
    CharSet(Vec<char>),
    /// Exact literal sequence.
    Str(Vec<char>),
    /// Any character `<= ' '` (one at a time; callers loop over runs).
    Trim,
    /// Never matches.
    None,
    /// User-supplied match function.
    Custom(Arc<MatchFn>),
}

impl StrMatcher {
    /// Matcher for an exact character.
    pub fn char_matcher(ch: char) -> Self {
        Self {
            kind: MatcherKind::Char(ch),
        }
    }

    /// Matcher for any character in `set`.
    ///
    /// An empty set degenerates to [`none_matcher`](Self::none_matcher).
    pub fn char_set_matcher(set: &str) -> Self {
        let mut chars: Vec<char> = set.chars().collect();
        if chars.is_empty() {
            return Self::none_matcher();
        }
        chars.sort_unstable();
        chars.dedup();
        Self {
            kind: MatcherKind::CharSet(chars),
        }
    }

    /// Matcher for an exact literal string.
    ///
    /// An empty literal degenerates to [`none_matcher`](Self::none_matcher).
    pub fn string_matcher(literal: &str) -> Self {
        let chars: Vec<char> = literal.chars().collect();
        if chars.is_empty() {
            return Self::none_matcher();
        }
        Self {
            kind: MatcherKind::Str(chars),
        }
    }

    /// Matcher for whitespace and control characters (anything `<= ' '`).
    ///
    /// Matches one character at a time; the tokenizer loops to strip runs.
    pub fn trim_matcher() -> Self {
        Self {
            kind: MatcherKind::Trim,
        }
    }

    /// Matcher that never matches.
    pub fn none_matcher() -> Self {
        Self {
            kind: MatcherKind::None,
        }
    }

    /// Matcher for a comma.
    pub fn comma_matcher() -> Self {
        Self::char_matcher(',')
    }

    /// Matcher for a tab.
    pub fn tab_matcher() -> Self {
        Self::char_matcher('\t')
    }

    /// Matcher for a space.
    pub fn space_matcher() -> Self {
        Self::char_matcher(' ')
    }

    /// Matcher for the whitespace split set: space, tab, newline,
    /// carriage return, and form feed. The default delimiter.
    pub fn split_matcher() -> Self {
        Self::char_set_matcher(" \t\n\r\u{c}")
    }

    /// Matcher for a single quote (`'`).
    pub fn single_quote_matcher() -> Self {
        Self::char_matcher('\'')
    }

    /// Matcher for a double quote (`"`).
    pub fn double_quote_matcher() -> Self {
        Self::char_matcher('"')
    }

    /// Matcher for a single or double quote.
    pub fn quote_matcher() -> Self {
        Self::char_set_matcher("'\"")
    }

    /// Matcher driven by a user-supplied match function.
    ///
    /// The function receives `(buffer, pos, range_start, range_end)` and
    /// returns the matched length (0 = no match). It must not report a
    /// length extending past `range_end`.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[char], usize, usize, usize) -> usize + Send + Sync + 'static,
    {
        Self {
            kind: MatcherKind::Custom(Arc::new(f)),
        }
    }

    /// Number of characters starting at `pos` that satisfy this rule.
    ///
    /// Returns 0 when nothing matches or `pos` lies outside
    /// `[range_start, range_end)`. Never reads outside that range.
    pub fn matches(
        &self,
        buffer: &[char],
        pos: usize,
        range_start: usize,
        range_end: usize,
    ) -> usize {
        debug_assert!(range_start <= range_end, "inverted match range");
        debug_assert!(range_end <= buffer.len(), "match range exceeds buffer");
        if pos < range_start || pos >= range_end {
            return 0;
        }
        match &self.kind {
            MatcherKind::Char(ch) => usize::from(buffer[pos] == *ch),
            MatcherKind::CharSet(set) => usize::from(set.binary_search(&buffer[pos]).is_ok()),
            MatcherKind::Str(literal) => {
                if literal.len() > range_end - pos {
                    return 0;
                }
                if buffer[pos..pos + literal.len()] == literal[..] {
                    literal.len()
                } else {
                    0
                }
            }
            MatcherKind::Trim => usize::from(buffer[pos] <= ' '),
            MatcherKind::None => 0,
            MatcherKind::Custom(f) => f(buffer, pos, range_start, range_end),
        }
    }
}

impl fmt::Debug for StrMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MatcherKind::Char(ch) => write!(f, "StrMatcher::Char({ch:?})"),
            MatcherKind::CharSet(set) => write!(f, "StrMatcher::CharSet({set:?})"),
            MatcherKind::Str(literal) => {
                write!(f, "StrMatcher::Str({:?})", literal.iter().collect::<String>())
            }
            MatcherKind::Trim => f.write_str("StrMatcher::Trim"),
            MatcherKind::None => f.write_str("StrMatcher::None"),
            MatcherKind::Custom(_) => f.write_str("StrMatcher::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests;
