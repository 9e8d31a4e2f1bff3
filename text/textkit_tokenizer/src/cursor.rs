//! Bidirectional cursor over a scanned token list.
//!
//! The cursor holds a single index in `[0, size]`: `0` is the boundary
//! before the first token (nothing to walk back over), `size` is the
//! boundary past the last token (nothing left to consume). Between those
//! boundaries, forward and backward traversal are strictly complementary:
//! N `next` calls followed by N `previous` calls restore the starting
//! position and replay the same tokens in reverse order.
//!
//! Traversal past either boundary is a [`CursorError`]; the non-failing
//! `*_token` accessors return `None` at the same boundaries instead.

use crate::tokenizer::Token;

/// Failure to move the cursor past a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// `next` was called with the cursor already past the last token.
    #[error("no next token: cursor is past the last token")]
    NoNextToken,
    /// `previous` was called with the cursor already before the first token.
    #[error("no previous token: cursor is before the first token")]
    NoPreviousToken,
}

/// Index-based bidirectional view over an ordered token list.
///
/// Owns the tokens it walks; the tokenizer rebuilds the cursor whenever
/// the cached token list is invalidated, so cursor state never outlives
/// the scan it indexes into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    /// Boundary index in `[0, tokens.len()]`.
    pos: usize,
}

impl TokenCursor {
    /// Create a cursor positioned before the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Number of tokens in the list. Stable until the owning tokenizer
    /// invalidates its cache.
    #[inline]
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// Borrowed view of the full token list, independent of position.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// `true` if a `next` call would succeed.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// `true` if a `previous` call would succeed.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.pos > 0
    }

    /// Consume and return the next token.
    #[allow(
        clippy::should_implement_trait,
        reason = "bidirectional cursor with Result-based bounds, not an Iterator"
    )]
    pub fn next(&mut self) -> Result<&Token, CursorError> {
        if self.pos < self.tokens.len() {
            self.pos += 1;
            Ok(&self.tokens[self.pos - 1])
        } else {
            Err(CursorError::NoNextToken)
        }
    }

    /// Step back and return the previous token.
    pub fn previous(&mut self) -> Result<&Token, CursorError> {
        if self.pos > 0 {
            self.pos -= 1;
            Ok(&self.tokens[self.pos])
        } else {
            Err(CursorError::NoPreviousToken)
        }
    }

    /// Consume and return the next token, or `None` at the end boundary.
    pub fn next_token(&mut self) -> Option<&Token> {
        if self.pos < self.tokens.len() {
            self.pos += 1;
            Some(&self.tokens[self.pos - 1])
        } else {
            None
        }
    }

    /// Step back and return the previous token, or `None` at the start
    /// boundary.
    pub fn previous_token(&mut self) -> Option<&Token> {
        if self.pos > 0 {
            self.pos -= 1;
            Some(&self.tokens[self.pos])
        } else {
            None
        }
    }

    /// Index the next `next` call would return, without moving.
    ///
    /// Equals [`size()`](Self::size) when the cursor is past the last token.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.pos
    }

    /// Index the next `previous` call would return, without moving.
    ///
    /// `None` when the cursor is before the first token.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    /// Absolute peek at token `index`, independent of cursor position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Return the cursor to the boundary before the first token.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

#[cfg(test)]
mod tests;
