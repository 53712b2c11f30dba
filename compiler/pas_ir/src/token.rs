//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;

use crate::{Name, Span};

/// Token kinds.
///
/// Data-carrying variants hold the literal payload. Real literals are stored
/// as raw `f64` bits so that `TokenKind` stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and identifiers
    Ident(Name),
    Int(i64),
    Real(u64),
    Str(Name),

    // Reserved words
    And,
    Array,
    Const,
    Div,
    In,
    Mod,
    Not,
    Of,
    Or,
    Set,
    Type,
    Var,

    // Operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Assign,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDot,

    /// A lexical error; the diagnostic was reported by the lexer.
    Error,
    Eof,
}

impl TokenKind {
    /// Number of distinct discriminants.
    pub const COUNT: u8 = 42;

    /// Discriminant index, used by bitset-based token sets.
    ///
    /// Data-carrying variants map by discriminant only, so `Int(1)` and
    /// `Int(2)` share an index.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 0,
            TokenKind::Int(_) => 1,
            TokenKind::Real(_) => 2,
            TokenKind::Str(_) => 3,
            TokenKind::And => 4,
            TokenKind::Array => 5,
            TokenKind::Const => 6,
            TokenKind::Div => 7,
            TokenKind::In => 8,
            TokenKind::Mod => 9,
            TokenKind::Not => 10,
            TokenKind::Of => 11,
            TokenKind::Or => 12,
            TokenKind::Set => 13,
            TokenKind::Type => 14,
            TokenKind::Var => 15,
            TokenKind::Plus => 16,
            TokenKind::Minus => 17,
            TokenKind::Star => 18,
            TokenKind::Slash => 19,
            TokenKind::Eq => 20,
            TokenKind::NotEq => 21,
            TokenKind::Lt => 22,
            TokenKind::LtEq => 23,
            TokenKind::Gt => 24,
            TokenKind::GtEq => 25,
            TokenKind::Assign => 26,
            TokenKind::LParen => 27,
            TokenKind::RParen => 28,
            TokenKind::LBracket => 29,
            TokenKind::RBracket => 30,
            TokenKind::Comma => 31,
            TokenKind::Semicolon => 32,
            TokenKind::Colon => 33,
            TokenKind::Dot => 34,
            TokenKind::DotDot => 35,
            TokenKind::Error => 40,
            TokenKind::Eof => 41,
        }
    }

    /// Construct a real-literal token kind.
    #[inline]
    pub fn real(value: f64) -> Self {
        TokenKind::Real(value.to_bits())
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Real(_) => "real number",
            TokenKind::Str(_) => "string",
            TokenKind::And => "`and`",
            TokenKind::Array => "`array`",
            TokenKind::Const => "`const`",
            TokenKind::Div => "`div`",
            TokenKind::In => "`in`",
            TokenKind::Mod => "`mod`",
            TokenKind::Not => "`not`",
            TokenKind::Of => "`of`",
            TokenKind::Or => "`or`",
            TokenKind::Set => "`set`",
            TokenKind::Type => "`type`",
            TokenKind::Var => "`var`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::NotEq => "`<>`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Assign => "`:=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::DotDot => "`..`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always terminated by a single `Eof` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a token list, appending the trailing `Eof` at `eof_offset`.
    pub fn new(mut tokens: Vec<Token>, eof_offset: u32) -> Self {
        tokens.push(Token::new(TokenKind::Eof, Span::point(eof_offset)));
        TokenList { tokens }
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: the list holds at least the `Eof` token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index, clamping to the trailing `Eof`.
    #[inline]
    pub fn get(&self, index: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    /// Iterate over token kinds, excluding the trailing `Eof`.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens[..self.tokens.len() - 1].iter().map(|t| t.kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}
