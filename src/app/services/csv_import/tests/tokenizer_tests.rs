//! Tests for the CSV tokenizer

use crate::app::services::csv_import::tokenize;

#[test]
fn test_unquoted_field_count_is_comma_count_plus_one() {
    let rows = tokenize("a,b,c\nd,e\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["a", "b", "c"]);
    assert_eq!(rows[1], vec!["d", "e"]);
}

#[test]
fn test_quoted_field_keeps_commas() {
    let rows = tokenize("a,\"b,c\",d");
    assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
}

#[test]
fn test_doubled_quote_decodes_to_one_quote() {
    let rows = tokenize("\"a\"\"b\"");
    assert_eq!(rows, vec![vec!["a\"b"]]);
}

#[test]
fn test_quoted_field_keeps_newlines() {
    let rows = tokenize("name,note\nSam,\"line one\nline two\"\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["Sam", "line one\nline two"]);
}

#[test]
fn test_carriage_returns_are_discarded() {
    let rows = tokenize("a,b\r\nc,d\r\n");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_blank_lines_are_dropped() {
    let rows = tokenize("a,b\n\n\nc,d\n\n");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_single_column_rows_survive_when_non_blank() {
    let rows = tokenize("only\n\n   \nvalue\n");
    assert_eq!(rows, vec![vec!["only"], vec!["value"]]);
}

#[test]
fn test_row_of_empty_fields_survives_when_multi_column() {
    // Two fields, both empty: still a row because of the comma.
    let rows = tokenize(",\n");
    assert_eq!(rows, vec![vec!["", ""]]);
}

#[test]
fn test_empty_input_yields_no_rows() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_unterminated_quote_runs_to_end_of_input() {
    let rows = tokenize("a,\"unterminated,with comma\nand newline");
    assert_eq!(rows, vec![vec!["a", "unterminated,with comma\nand newline"]]);
}

#[test]
fn test_final_row_without_trailing_newline_is_emitted() {
    let rows = tokenize("a,b\nc,d");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["c", "d"]);
}
