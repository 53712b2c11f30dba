//! Lexer tests: token kinds, case folding, comments and error tokens.

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> (Vec<TokenKind>, Vec<Diagnostic>, StringInterner) {
    let interner = StringInterner::new();
    let mut diagnostics = Vec::new();
    let tokens = lex(source, &interner, &mut diagnostics);
    (tokens.kinds().collect(), diagnostics, interner)
}

#[test]
fn test_set_type_declaration() {
    let (kinds, diagnostics, interner) = kinds("type digits = set of 0..9;");
    assert!(diagnostics.is_empty());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Type,
            TokenKind::Ident(interner.intern("digits")),
            TokenKind::Eq,
            TokenKind::Set,
            TokenKind::Of,
            TokenKind::Int(0),
            TokenKind::DotDot,
            TokenKind::Int(9),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers_fold_case() {
    let (kinds, _, interner) = kinds("SET Of Digits dIgItS");
    let digits = interner.intern("digits");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Set,
            TokenKind::Of,
            TokenKind::Ident(digits),
            TokenKind::Ident(digits)
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let (kinds, _, interner) = kinds("settle inner");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident(interner.intern("settle")),
            TokenKind::Ident(interner.intern("inner"))
        ]
    );
}

#[test]
fn test_real_literals() {
    let (kinds, diagnostics, _) = kinds("2.5 1e3 7.0E-1");
    assert!(diagnostics.is_empty());
    assert_eq!(
        kinds,
        vec![
            TokenKind::real(2.5),
            TokenKind::real(1000.0),
            TokenKind::real(0.7)
        ]
    );
}

#[test]
fn test_subrange_is_not_a_real() {
    let (kinds, _, _) = kinds("[1..10]");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LBracket,
            TokenKind::Int(1),
            TokenKind::DotDot,
            TokenKind::Int(10),
            TokenKind::RBracket
        ]
    );
}

#[test]
fn test_operators() {
    let (kinds, _, _) = kinds("+ - * / = <> < <= > >= := ( ) , : .");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Dot,
        ]
    );
}

#[test]
fn test_comments_skipped() {
    let (kinds, diagnostics, _) = kinds("{ braces } div (* stars * inside *) mod");
    assert!(diagnostics.is_empty());
    assert_eq!(kinds, vec![TokenKind::Div, TokenKind::Mod]);
}

#[test]
fn test_string_with_doubled_quote() {
    let (kinds, diagnostics, interner) = kinds("'it''s' 'a'");
    assert!(diagnostics.is_empty());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Str(interner.intern("it's")),
            TokenKind::Str(interner.intern("a"))
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let (kinds, diagnostics, _) = kinds("'abc\n;");
    assert_eq!(kinds, vec![TokenKind::Error, TokenKind::Semicolon]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
}

#[test]
fn test_invalid_character_continues() {
    let (kinds, diagnostics, _) = kinds("set # of");
    assert_eq!(kinds, vec![TokenKind::Set, TokenKind::Error, TokenKind::Of]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0002);
    assert_eq!(diagnostics[0].primary_span(), Some(Span::new(4, 5)));
}

#[test]
fn test_integer_overflow() {
    let (kinds, diagnostics, _) = kinds("99999999999999999999");
    assert_eq!(kinds, vec![TokenKind::Error]);
    assert_eq!(diagnostics[0].code, ErrorCode::E0003);
}

#[test]
fn test_spans_and_eof() {
    let interner = StringInterner::new();
    let mut diagnostics = Vec::new();
    let tokens = lex("set of", &interner, &mut diagnostics);

    assert_eq!(tokens.get(0).span, Span::new(0, 3));
    assert_eq!(tokens.get(1).span, Span::new(4, 6));
    assert_eq!(tokens.get(2).kind, TokenKind::Eof);
    assert_eq!(tokens.get(2).span, Span::point(6));
}
