//! End-to-end parser tests through the public entry points.

use pas_diagnostic::{DiagnosticConfig, DiagnosticQueue, ErrorCode};
use pas_ir::{ExprKind, StringInterner, SymbolKind, TypeId};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_config() {
    let config = ParserConfig::default();
    assert_eq!(config.max_type_depth, 64);
    assert_eq!(config.max_expr_depth, 1000);
}

#[test]
fn test_expression_sees_declarations() {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();

    let decls = pas_lexer::lex("var s : set of 1..10;", &interner, &mut queue);
    let unit = parse_declarations(&decls, &interner, &mut queue);

    let expr = pas_lexer::lex("s + [2]", &interner, &mut queue);
    let (unit, root) = parse_expression(&expr, &interner, unit, &mut queue);

    assert!(!queue.has_errors());
    assert!(matches!(
        unit.exprs.get_expr(root).kind,
        ExprKind::Binary { .. }
    ));
    let s = unit.symbols.lookup(interner.intern("s")).map(|sym| sym.kind);
    assert!(matches!(s, Some(SymbolKind::Variable(_))));
}

#[test]
fn test_errors_reach_the_queue_in_source_order() {
    let source = "type a = set 1..3;\n     b = array 1..2] of integer;";
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited()).with_source(source);
    let tokens = pas_lexer::lex(source, &interner, &mut queue);
    let unit = parse_declarations(&tokens, &interner, &mut queue);

    let codes: Vec<_> = queue.flush().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E1003]);

    let b = unit.symbols.lookup(interner.intern("b")).map(|sym| sym.kind);
    assert!(matches!(b, Some(SymbolKind::Type(ty)) if ty != TypeId::ERROR));
}

#[test]
fn test_parser_resume_keeps_unit() {
    let interner = StringInterner::new();
    let mut diagnostics = Vec::new();
    let decls = pas_lexer::lex("const k = 3;", &interner, &mut diagnostics);
    let unit = parse_declarations(&decls, &interner, &mut diagnostics);
    let before = unit.symbols.len();

    let tokens = pas_lexer::lex("k", &interner, &mut diagnostics);
    let mut parser = Parser::new(&tokens, &interner, &mut diagnostics).resume(unit);
    let root = parser.parse_expression();
    assert!(parser.is_at_end());
    assert_eq!(parser.unit().symbols.len(), before);
    assert_eq!(
        parser.unit().exprs.get_expr(root).kind,
        ExprKind::IntegerLiteral(3)
    );
}
