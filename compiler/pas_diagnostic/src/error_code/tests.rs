use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    assert_eq!(ErrorCode::E6001.as_str(), "E6001");
}

#[test]
fn test_set_parser_codes() {
    assert_eq!(ErrorCode::E1002.description(), "missing `of`");
    assert_eq!(ErrorCode::E1003.description(), "missing `[`");
    assert_eq!(ErrorCode::E1004.description(), "missing `]`");
}

#[test]
fn test_eval_error_codes() {
    assert_eq!(ErrorCode::E6001.description(), "division by zero");
    assert_eq!(ErrorCode::E6070.to_string(), "E6070");
}

#[test]
fn test_all_codes_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
        assert!(!code.description().is_empty());
    }
}
