//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Membership is a bitset test over `TokenKind` discriminant indices.

use super::cursor::Cursor;
use pas_ir::TokenKind;
use tracing::trace;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind` discriminant index.
/// `TokenKind::COUNT` is below 64, so one word covers every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

// Payload values below are placeholders; only the discriminant is stored.
const IDENT: TokenKind = TokenKind::Ident(pas_ir::Name::EMPTY);
const INT: TokenKind = TokenKind::Int(0);
const REAL: TokenKind = TokenKind::Real(0);
const STR: TokenKind = TokenKind::Str(pas_ir::Name::EMPTY);

/// Tokens that can start a simple type (named type, subrange, enumeration).
///
/// Comma and semicolon are included so recovery stops before list and
/// declaration separators instead of swallowing them.
pub const SIMPLE_TYPE_START: TokenSet = TokenSet::new()
    .with(IDENT)
    .with(INT)
    .with(REAL)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(STR)
    .with(TokenKind::LParen)
    .with(TokenKind::Comma)
    .with(TokenKind::Semicolon);

/// Tokens that can start any type specification.
pub const TYPE_START: TokenSet = SIMPLE_TYPE_START
    .with(TokenKind::Array)
    .with(TokenKind::Set)
    .with(TokenKind::Semicolon);

/// Synchronization after `array`, looking for `[`.
pub const LEFT_BRACKET_SET: TokenSet = SIMPLE_TYPE_START
    .with(TokenKind::LBracket)
    .with(TokenKind::RBracket);

/// Synchronization after the index list, looking for `]`.
pub const RIGHT_BRACKET_SET: TokenSet = TokenSet::new()
    .with(TokenKind::RBracket)
    .with(TokenKind::Of)
    .with(TokenKind::Semicolon);

/// Synchronization before `of` in array and set types.
pub const OF_SET: TokenSet = TYPE_START.with(TokenKind::Of).with(TokenKind::Semicolon);

/// Tokens that can start an array index type.
pub const INDEX_START: TokenSet = SIMPLE_TYPE_START.with(TokenKind::Comma);

/// Tokens that can end an array index list.
pub const INDEX_END: TokenSet = TokenSet::new()
    .with(TokenKind::RBracket)
    .with(TokenKind::Of)
    .with(TokenKind::Semicolon);

/// Tokens after an index type that mean a `,` was left out.
pub const INDEX_CONTINUE: TokenSet = TokenSet::new()
    .with(IDENT)
    .with(INT)
    .with(REAL)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(STR)
    .with(TokenKind::LParen);

/// Tokens that can follow an array index type.
pub const INDEX_FOLLOW: TokenSet = INDEX_START.union(INDEX_END);

/// Tokens that can start a constant.
pub const CONSTANT_START: TokenSet = TokenSet::new()
    .with(IDENT)
    .with(INT)
    .with(REAL)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(STR)
    .with(TokenKind::Semicolon);

/// Synchronization between subrange bounds, looking for `..`.
pub const DOT_DOT_SET: TokenSet = CONSTANT_START.with(TokenKind::DotDot);

/// Section keywords.
pub const DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Const)
    .with(TokenKind::Type)
    .with(TokenKind::Var);

/// Synchronization at the start of a declaration, looking for its name.
pub const DECL_IDENT_SET: TokenSet = DECLARATION_START.with(IDENT);

/// Tokens that can start the next declaration; a missing `;` before one of
/// these is reported.
pub const NEXT_START: TokenSet = DECLARATION_START.with(IDENT);

/// Synchronization between a constant name and its value.
pub const CONST_EQUALS_SET: TokenSet = CONSTANT_START.with(TokenKind::Eq);

/// Synchronization between a type name and its specification.
pub const TYPE_EQUALS_SET: TokenSet = TYPE_START.with(TokenKind::Eq);

/// Tokens that can start or follow an enumeration constant.
pub const ENUM_CONSTANT_START: TokenSet = TokenSet::new()
    .with(IDENT)
    .with(TokenKind::Comma)
    .with(TokenKind::RParen)
    .with(TokenKind::Semicolon);

/// Tokens that can follow an enumeration constant.
pub const ENUM_DEFINITION_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen)
    .with(TokenKind::Semicolon)
    .union(DECLARATION_START);

/// Tokens that can follow a variable name in a `var` list.
pub const VAR_NAME_FOLLOW: TokenSet = TokenSet::new()
    .with(IDENT)
    .with(TokenKind::Comma)
    .with(TokenKind::Colon)
    .with(TokenKind::Semicolon)
    .union(DECLARATION_START);

/// Synchronization before the `:` of a variable declaration.
///
/// Includes type starts so a missing `:` does not swallow the type.
pub const COLON_SET: TokenSet = TYPE_START.with(TokenKind::Colon);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            trace!(skipped = cursor.position() - start, "synchronized");
            return true;
        }
        cursor.advance();
    }
    trace!(skipped = cursor.position() - start, "synchronize reached end");
    false
}
