//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead, and consumption. The cursor
//! never moves past the trailing `Eof` token, so `current()` is always valid.

use pas_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position in the token stream.
    ///
    /// Compare positions before and after a step to check for progress.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.get(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`, ignoring payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().discriminant_index() == kind.discriminant_index()
    }

    /// The current identifier, if the current token is one.
    #[inline]
    pub fn current_ident(&self) -> Option<Name> {
        match *self.current_kind() {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Peek at the next token's kind (one-token lookahead).
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        &self.tokens.get(self.pos + 1).kind
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the position does not change and `Eof` is returned again.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }
}

#[cfg(test)]
mod tests;
