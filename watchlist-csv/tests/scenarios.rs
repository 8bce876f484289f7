use std::collections::BTreeMap;

use watchlist_csv::{
    CsvError, CsvOptions, QuoteMismatch, Row, Separator, Table, parse_csv,
    parse_with,
};

const DOCUMENT: &str = "\"col1\",\"colWith  \"\"  2\" ,\"col3,comma;semi\" \n\
                        1  ,  string ,\"quotedString\"";

fn row(pairs: &[(usize, &str)]) -> Row {
    pairs
        .iter()
        .map(|(col, value)| (*col, value.to_string()))
        .collect::<BTreeMap<_, _>>()
        .into()
}

fn expected() -> Vec<Row> {
    vec![
        row(&[(0, "col1"), (1, "colWith  \"  2"), (2, "col3,comma;semi")]),
        row(&[(0, "1  "), (1, "  string "), (2, "quotedString")]),
    ]
}

#[test]
fn quoted_and_unquoted_fields() {
    assert_eq!(parse_csv(DOCUMENT, Separator::Comma).unwrap(), expected());
}

#[test]
fn empty_document() {
    assert_eq!(parse_csv("", Separator::Comma).unwrap(), Vec::<Row>::new());
    assert_eq!(parse_csv("", Separator::Semicolon).unwrap(), Vec::<Row>::new());
}

#[test]
fn trailing_line_feed_adds_no_row() {
    let input = format!("{DOCUMENT}\n");
    assert_eq!(parse_csv(&input, Separator::Comma).unwrap(), expected());
}

#[test]
fn trailing_line_feed_after_unquoted_field() {
    let input = DOCUMENT.replace("\"quotedString\"", "notQuotedString") + "\n";
    let rows = parse_csv(&input, Separator::Comma).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], expected()[0]);
    assert_eq!(rows[1].get(2), Some("notQuotedString"));
}

#[test]
fn comma_is_text_under_semicolon_separator() {
    let rows = parse_csv("a,b;c", Separator::Semicolon).unwrap();
    assert_eq!(rows, vec![row(&[(0, "a,b"), (1, "c")])]);
}

#[test]
fn stray_quote_is_rejected() {
    let err = parse_csv("ticker,na\"me", Separator::Comma).unwrap_err();
    assert!(matches!(
        err,
        CsvError::QuoteMismatch {
            kind: QuoteMismatch::Close,
            ..
        }
    ));
}

#[test]
fn columns_are_contiguous_from_zero() {
    let input = "a,,\"c\"\n;x,\"\"\n\"\"\"\",  ,z  ";
    for row in parse_csv(input, Separator::Comma).unwrap() {
        let columns: Vec<usize> = row.iter().map(|(col, _)| col).collect();
        assert_eq!(columns, (0..row.len()).collect::<Vec<_>>());
    }
}

#[test]
fn failed_parse_returns_no_rows() {
    let input = "AAPL,187.2\nMSFT,\"unterminated\nGOOG,140";
    let err = parse_csv(input, Separator::Comma).unwrap_err();
    assert!(matches!(err, CsvError::NoTransition { .. }));
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn header_table_from_semicolon_export() {
    let input = "Symbol;Name;Kurs\nSAP;\"SAP SE; Walldorf\";120,50\n";
    let options = CsvOptions::with_separator(Separator::Semicolon);
    let table = Table::from_rows(parse_with(input, &options).unwrap());

    let record = table.records().next().unwrap();
    assert_eq!(record.get("Name"), Some("SAP SE; Walldorf"));
    assert_eq!(record.get("Kurs"), Some("120,50"));
    assert_eq!(table.len(), 1);
}
