#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pas_diagnostic::{Diagnostic, ErrorCode};
use pas_ir::{ConstValue, Span, StringInterner, SymbolKind, TypeForm, TypeId};
use pretty_assertions::assert_eq;

use crate::{Parser, ParserConfig, Unit};

struct Parsed {
    ty: TypeId,
    unit: Unit,
    diagnostics: Vec<Diagnostic>,
    interner: StringInterner,
}

impl Parsed {
    fn form(&self, id: TypeId) -> &TypeForm {
        self.unit.types.get(id)
    }

    fn describe(&self) -> String {
        self.unit.types.describe(self.ty, &self.interner)
    }

    fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

fn parse_type_with(source: &str, config: ParserConfig) -> Parsed {
    let interner = StringInterner::new();
    let mut diagnostics = Vec::new();
    let tokens = pas_lexer::lex(source, &interner, &mut diagnostics);
    let mut parser = Parser::new(&tokens, &interner, &mut diagnostics).with_config(config);
    let ty = parser.parse_type_spec();
    let unit = parser.into_unit();
    Parsed {
        ty,
        unit,
        diagnostics,
        interner,
    }
}

fn parse_type(source: &str) -> Parsed {
    parse_type_with(source, ParserConfig::default())
}

#[test]
fn test_set_of_subrange() {
    let parsed = parse_type("set of 1..10");
    assert!(parsed.diagnostics.is_empty());

    let element = parsed.unit.types.set_element(parsed.ty).unwrap();
    assert_eq!(
        parsed.form(element),
        &TypeForm::Subrange {
            base: TypeId::INTEGER,
            min: 1,
            max: 10
        }
    );
}

#[test]
fn test_set_missing_of_still_builds_set() {
    let parsed = parse_type("set 1..10");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert_eq!(parsed.diagnostics[0].primary_span(), Some(Span::new(4, 5)));

    let element = parsed.unit.types.set_element(parsed.ty).unwrap();
    assert_eq!(parsed.describe(), "set of 1..10");
    assert!(matches!(parsed.form(element), TypeForm::Subrange { .. }));
}

#[test]
fn test_set_of_named_type_shares_descriptor() {
    let parsed = parse_type("set of char");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.unit.types.set_element(parsed.ty), Some(TypeId::CHAR));
}

#[test]
fn test_set_of_char_subrange() {
    let parsed = parse_type("set of 'a'..'z'");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.describe(), "set of 'a'..'z'");

    let element = parsed.unit.types.set_element(parsed.ty).unwrap();
    assert_eq!(
        parsed.form(element),
        &TypeForm::Subrange {
            base: TypeId::CHAR,
            min: 97,
            max: 122
        }
    );
}

#[test]
fn test_set_of_enumeration_defines_constants() {
    let parsed = parse_type("set of (red, green, blue)");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.describe(), "set of (red, green, blue)");

    let element = parsed.unit.types.set_element(parsed.ty).unwrap();
    let blue = parsed.unit.symbols.lookup(parsed.interner.intern("blue")).unwrap();
    assert_eq!(
        blue.kind,
        SymbolKind::Constant {
            value: ConstValue::Enum(2),
            ty: element
        }
    );
}

#[test]
fn test_sync_skips_to_first_of_set_token() {
    let parsed = parse_type("set * / of integer");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001]);
    assert_eq!(parsed.diagnostics[0].primary_span(), Some(Span::new(4, 5)));
    assert_eq!(parsed.unit.types.set_element(parsed.ty), Some(TypeId::INTEGER));
}

#[test]
fn test_set_of_missing_element_type() {
    let parsed = parse_type("set of ;");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1005]);
    assert_eq!(parsed.unit.types.set_element(parsed.ty), Some(TypeId::ERROR));
}

#[test]
fn test_set_of_undefined_identifier() {
    let parsed = parse_type("set of digit");
    assert_eq!(parsed.codes(), vec![ErrorCode::E2001]);
    assert_eq!(parsed.unit.types.set_element(parsed.ty), Some(TypeId::ERROR));
}

#[test]
fn test_subrange_checks() {
    assert_eq!(parse_type("set of 10..1").codes(), vec![ErrorCode::E2004]);
    assert_eq!(parse_type("set of 1..'z'").codes(), vec![ErrorCode::E2003]);
    assert_eq!(parse_type("set of 1.5..2.5").codes(), vec![ErrorCode::E1005]);
    assert_eq!(parse_type("set of 1 10").codes(), vec![ErrorCode::E1006]);
}

#[test]
fn test_signed_subrange() {
    let parsed = parse_type("-5..+5");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(
        parsed.form(parsed.ty),
        &TypeForm::Subrange {
            base: TypeId::INTEGER,
            min: -5,
            max: 5
        }
    );
}

#[test]
fn test_array_of_set() {
    let parsed = parse_type("array [1..3] of set of 0..7");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.describe(), "array [1..3] of set of 0..7");

    let TypeForm::Array {
        element, count, ..
    } = *parsed.form(parsed.ty)
    else {
        panic!("expected array, got {:?}", parsed.form(parsed.ty));
    };
    assert_eq!(count, 3);
    assert!(parsed.unit.types.set_element(element).is_some());
}

#[test]
fn test_array_missing_left_bracket_flagged_once() {
    let parsed = parse_type("array 1..3] of integer");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1003]);
    assert_eq!(parsed.describe(), "array [1..3] of integer");
}

#[test]
fn test_array_missing_right_bracket() {
    let parsed = parse_type("array [1..3 of integer");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1004]);
    assert_eq!(parsed.describe(), "array [1..3] of integer");
}

#[test]
fn test_array_missing_of() {
    let parsed = parse_type("array [1..3] integer");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert_eq!(parsed.describe(), "array [1..3] of integer");
}

#[test]
fn test_multi_dimensional_array_nests() {
    let parsed = parse_type("array [1..2, 'a'..'c'] of real");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.describe(), "array [1..2] of array ['a'..'c'] of real");

    let TypeForm::Array { element, count, .. } = *parsed.form(parsed.ty) else {
        panic!("expected array");
    };
    assert_eq!(count, 2);
    assert!(matches!(
        parsed.form(element),
        TypeForm::Array { count: 3, element: TypeId::REAL, .. }
    ));
}

#[test]
fn test_array_missing_comma_between_indexes() {
    let parsed = parse_type("array [1..2 3..4] of boolean");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001]);
    assert_eq!(parsed.describe(), "array [1..2] of array [3..4] of boolean");
}

#[test]
fn test_array_index_must_be_ordinal() {
    let parsed = parse_type("array [integer] of real");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1005]);
}

#[test]
fn test_duplicate_enumeration_constant() {
    let parsed = parse_type("(a, b, a)");
    assert_eq!(parsed.codes(), vec![ErrorCode::E2002]);
    assert_eq!(parsed.describe(), "(a, b)");
}

#[test]
fn test_enumeration_missing_rparen() {
    let parsed = parse_type("(a, b;");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1007]);
}

#[test]
fn test_type_depth_guard() {
    let source = format!("{}integer", "set of ".repeat(70));
    let parsed = parse_type(&source);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1014]);

    let config = ParserConfig {
        max_type_depth: 2,
        ..ParserConfig::default()
    };
    let parsed = parse_type_with("set of set of set of integer", config);
    assert_eq!(parsed.codes(), vec![ErrorCode::E1014]);
    assert_eq!(parsed.describe(), "set of set of <error>");
}
