//! Lexer for the Pascal set front end using logos.
//!
//! Produces a [`TokenList`] terminated by a single `Eof` token. Identifiers
//! are folded to lower case before interning. Lexical errors are reported to
//! the diagnostic sink and leave an `Error` token in the stream, so the
//! parser's recovery sees them like any other unexpected token.

mod raw_token;

use logos::Logos;
use pas_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use pas_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use raw_token::RawToken;

const COMPONENT: &str = "lexer";

/// Lex source code into a [`TokenList`].
pub fn lex(source: &str, interner: &StringInterner, sink: &mut dyn DiagnosticSink) -> TokenList {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match result {
            Ok(RawToken::UnterminatedStr) => {
                sink.emit(
                    Diagnostic::error(ErrorCode::E0001)
                        .with_message("unterminated string literal")
                        .with_label(span, "missing closing `'`")
                        .with_component(COMPONENT),
                );
                TokenKind::Error
            }
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => {
                sink.emit(lex_error(span, slice));
                TokenKind::Error
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    TokenList::new(tokens, eof)
}

fn lex_error(span: Span, slice: &str) -> Diagnostic {
    if slice.starts_with(|c: char| c.is_ascii_digit()) {
        Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("invalid number `{slice}`"))
            .with_label(span, "number out of range")
            .with_component(COMPONENT)
    } else {
        Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("invalid character `{}`", slice.escape_debug()))
            .with_label(span, "not valid here")
            .with_component(COMPONENT)
    }
}

/// Convert a raw token to a [`TokenKind`], interning text.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Real(value) => TokenKind::real(value),
        RawToken::Str => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::Str(interner.intern(&body.replace("''", "'")))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(&slice.to_ascii_lowercase())),

        RawToken::And => TokenKind::And,
        RawToken::Array => TokenKind::Array,
        RawToken::Const => TokenKind::Const,
        RawToken::Div => TokenKind::Div,
        RawToken::In => TokenKind::In,
        RawToken::Mod => TokenKind::Mod,
        RawToken::Not => TokenKind::Not,
        RawToken::Of => TokenKind::Of,
        RawToken::Or => TokenKind::Or,
        RawToken::Set => TokenKind::Set,
        RawToken::Type => TokenKind::Type,
        RawToken::Var => TokenKind::Var,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,

        // Handled by the caller before conversion.
        RawToken::UnterminatedStr => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
