use super::*;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let mut diagnostics = Vec::new();
        let tokens = pas_lexer::lex(source, &interner, &mut diagnostics);
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("set of digits");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(&TokenKind::Set));
    assert!(!cursor.is_at_end());

    cursor.advance();
    assert!(cursor.check(&TokenKind::Of));
    assert!(matches!(cursor.peek_next_kind(), TokenKind::Ident(_)));

    cursor.advance();
    assert_eq!(cursor.current_ident(), Some(ctx.interner.intern("digits")));

    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_check_ignores_payload() {
    let ctx = TestCtx::new("42");
    let cursor = ctx.cursor();
    assert!(cursor.check(&TokenKind::Int(0)));
    assert!(!cursor.check(&TokenKind::real(0.0)));
}

#[test]
fn test_advance_stops_at_eof() {
    let ctx = TestCtx::new("of");
    let mut cursor = ctx.cursor();

    assert_eq!(cursor.advance().kind, TokenKind::Of);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 1);
    assert!(cursor.is_at_end());
}

#[test]
fn test_previous_span() {
    let ctx = TestCtx::new("set of");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.previous_span(), Span::DUMMY);
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 3));
}
