use super::*;
use std::io::Cursor;

fn column(name: &str, index: usize) -> ColumnSelection {
    ColumnSelection {
        name: name.to_string(),
        index,
    }
}

#[test]
fn header_strips_quotes_and_newline() {
    let options = ParseOptions::default();
    let mut reader = Cursor::new("\"groupID\"\t\"log2fold\"\r\nrow\n");
    let header = read_header(&mut reader, &options).expect("header");
    assert_eq!(header, vec!["groupID", "log2fold"]);
}

#[test]
fn empty_input_has_no_header() {
    let options = ParseOptions::default();
    let mut reader = Cursor::new("");
    let err = read_header(&mut reader, &options).expect_err("empty");
    assert!(matches!(err, InputError::EmptyInput));
}

#[test]
fn resolves_column_position() {
    let header = vec!["group".to_string(), "pvalue".to_string(), "log2fold".to_string()];
    let got = resolve_column(&header, "log2fold").expect("resolve");
    assert_eq!(got, column("log2fold", 2));
}

#[test]
fn unknown_column_names_request_and_header() {
    let header = vec!["group".to_string(), "log2fold".to_string()];
    let err = resolve_column(&header, "doesNotExist").expect_err("unknown");
    let msg = err.to_string();
    assert!(msg.contains("doesNotExist"));
    assert!(msg.contains("group, log2fold"));
}

#[test]
fn parses_value_and_missing() {
    let options = ParseOptions::default();
    let col = column("log2fold", 1);

    let row = parse_row("geneA_E1\t-0.25", 2, &col, &options).expect("row");
    assert_eq!(row.group, "geneA_E1");
    assert_eq!(row.measurement, Measurement::Value(-0.25));

    let row = parse_row("geneB_E1+geneA_E3\tNA", 3, &col, &options).expect("row");
    assert_eq!(row.measurement, Measurement::Missing);
}

#[test]
fn missing_token_is_exact_match() {
    let options = ParseOptions::default();
    let col = column("log2fold", 1);
    let err = parse_row("geneA_E1\tna", 4, &col, &options).expect_err("lowercase na");
    assert!(matches!(err, InputError::InvalidValue { line: 4, .. }));
}

#[test]
fn non_numeric_value_reports_line_and_text() {
    let options = ParseOptions::default();
    let col = column("log2fold", 1);
    let err = parse_row("geneA_E1\tabc", 7, &col, &options).expect_err("abc");
    match &err {
        InputError::InvalidValue {
            line,
            column,
            value,
        } => {
            assert_eq!(*line, 7);
            assert_eq!(column, "log2fold");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("line 7"));
}

#[test]
fn short_row_is_rejected() {
    let options = ParseOptions::default();
    let col = column("padj", 3);
    let err = parse_row("geneA_E1\t1.0", 5, &col, &options).expect_err("short");
    assert!(matches!(err, InputError::InvalidTsvRow { line: 5, .. }));
}

#[test]
fn clean_line_keeps_unquoted_lines_borrowed() {
    let options = ParseOptions::default();
    assert!(matches!(
        clean_line("geneA_E1\t1.0\n", &options),
        Cow::Borrowed("geneA_E1\t1.0")
    ));
    assert_eq!(clean_line("\"geneA_E1\"\t\"1.0\"\n", &options), "geneA_E1\t1.0");
}

#[test]
fn quotes_kept_when_stripping_disabled() {
    let options = ParseOptions {
        strip_quotes: false,
        ..ParseOptions::default()
    };
    assert_eq!(clean_line("\"a\"\n", &options), "\"a\"");
}

#[test]
fn gene_symbol_extraction() {
    let options = ParseOptions::default();
    let single: Vec<&str> = gene_symbols("geneA_exon3", &options).collect();
    assert_eq!(single, vec!["geneA"]);

    let bare: Vec<&str> = gene_symbols("geneA", &options).collect();
    assert_eq!(bare, vec!["geneA"]);

    let overlap: Vec<&str> = gene_symbols("geneA_E1+geneB_E2", &options).collect();
    assert_eq!(overlap, vec!["geneA", "geneB"]);

    let first_underscore: Vec<&str> = gene_symbols("ENSG1_a_b", &options).collect();
    assert_eq!(first_underscore, vec!["ENSG1"]);
}

#[test]
fn gene_symbols_follow_custom_separators() {
    let options = ParseOptions {
        group_separator: ';',
        symbol_separator: ':',
        ..ParseOptions::default()
    };
    let got: Vec<&str> = gene_symbols("g1:E001;g2:E004", &options).collect();
    assert_eq!(got, vec!["g1", "g2"]);
}
