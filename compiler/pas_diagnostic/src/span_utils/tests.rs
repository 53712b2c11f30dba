use super::*;

#[test]
fn test_line_from_offset_multiple_lines() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(12), 3); // 'l' of line3
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_column_counts_chars() {
    // 'é' is two bytes
    let source = "{é} set";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 5), (1, 5));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
}

#[test]
fn test_line_text() {
    let source = "type\r\n  s = set of 1..9;\nvar";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), "type");
    assert_eq!(table.line_text(source, 2), "  s = set of 1..9;");
    assert_eq!(table.line_text(source, 3), "var");
    assert_eq!(table.line_text(source, 4), "");
}
