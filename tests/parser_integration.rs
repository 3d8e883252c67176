//! Integration tests for the tokenizer, parser and extractor
//!
//! These tests drive the public API end to end on realistic inputs.

use gradecsv::csv::{LineEnding, TokenKind};
use gradecsv::{analyze, extract, parse, tokenize, AdvisoryConfig, Config, Field};

fn document(input: &str) -> gradecsv::Document {
    extract(&parse(input).unwrap(), &AdvisoryConfig::default())
}

// ============================================================================
// Tokenizer
// ============================================================================

#[test]
fn test_token_stream_shape() {
    let kinds: Vec<TokenKind> = tokenize("a,\"b\"\r\nc")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Text,
            TokenKind::FieldSep,
            TokenKind::QuotedString,
            TokenKind::RowSep(LineEnding::CrLf),
            TokenKind::Text,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_quoted_string_spans_lines() {
    let doc = document("nota\n\"linea uno\nlinea dos\"");
    assert_eq!(doc.rows()[0], vec!["linea uno\nlinea dos"]);
}

// ============================================================================
// Grammar
// ============================================================================

#[test]
fn test_scenario_document() {
    let doc = document("nombre,edad\nCristian,24\nOscar,");
    assert_eq!(doc.header(), &["nombre", "edad"]);
    assert_eq!(doc.rows(), &[vec!["Cristian", "24"], vec!["Oscar", ""]]);
    assert_eq!(doc.total_fields(), 6);
}

#[test]
fn test_ragged_rows_are_kept() {
    let doc = document("a,b,c\n1\n1,2,3,4");
    assert_eq!(doc.rows()[0].len(), 1);
    assert_eq!(doc.rows()[1].len(), 4);
    assert_eq!(doc.total_fields(), 8);
}

#[test]
fn test_quoted_field_not_trimmed_text_field_trimmed() {
    let doc = document("  x  ,\"  y  \"");
    assert_eq!(doc.header(), &["x", "  y  "]);
}

#[test]
fn test_whitespace_around_quoted_field_is_skipped() {
    let tree = parse("a,  \"b\"  ,c").unwrap();
    assert!(matches!(tree.rows[0].fields[1].field, Field::Quoted(_)));
    assert_eq!(tree.rows[0].fields[1].field.value(), "b");
}

#[test]
fn test_escaped_quotes() {
    let doc = document("comentario\n\"Dijo: \"\"hola\"\"\"");
    assert_eq!(doc.rows()[0], vec!["Dijo: \"hola\""]);
}

#[test]
fn test_unicode_text() {
    let doc = document("nombre\nARIAS HERNÁNDEZ MARIO DE JESÚS");
    assert_eq!(doc.rows()[0], vec!["ARIAS HERNÁNDEZ MARIO DE JESÚS"]);
}

#[test]
fn test_line_endings_agree() {
    let lf = document("a,b\n1,2\n3,4\n");
    let crlf = document("a,b\r\n1,2\r\n3,4\r\n");
    assert_eq!(lf, crlf);
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_grade_sheet_summary() {
    let input = ",,PA,Q1,Q2,PA,PA,LAB,EXA,PA,CAL,RED\n\
                 1,ANAYA CERVANTES DAVID FELIPE,0,2,0,0,10,0,7.0,0,,\n\
                 2,APARICIO VIVAR SAUL ELISEO,10,3,5.3,10,10,10,7.24,10,,";
    let analysis = analyze(input, &Config::default()).unwrap();

    assert_eq!(analysis.summary.total_rows, 3);
    assert_eq!(analysis.summary.total_columns, 12);
    assert_eq!(analysis.summary.total_fields, 36);
    assert_eq!(analysis.summary.empty_fields, 6);
    assert!(analysis.document.warnings().is_empty());
}

#[test]
fn test_advisory_warnings_do_not_abort() {
    let input = "id,name,PA\n1,Ana,11\n2,Luis,-1\n3,Eva,9";
    let analysis = analyze(input, &Config::default()).unwrap();
    let warnings = analysis.document.warnings();

    assert_eq!(analysis.document.rows().len(), 3);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].to_string(), "Invalid grade '11' in row 2, column 3");
    assert_eq!(warnings[1].value, "-1");
}

#[test]
fn test_advisory_first_column_configurable() {
    let config = Config::default().with_advisory(AdvisoryConfig::new().with_first_column(0));
    let analysis = analyze("42,b\n1,2", &config).unwrap();
    assert_eq!(analysis.document.warnings().len(), 1);
    assert_eq!(analysis.document.warnings()[0].column, 0);
}

#[test]
fn test_advisory_disabled() {
    let config = Config::default().with_advisory(AdvisoryConfig::disabled());
    let analysis = analyze("a,b,c\n1,2,99", &config).unwrap();
    assert!(analysis.document.warnings().is_empty());
}

#[test]
fn test_document_json() {
    let analysis = analyze("nombre,edad\nCristian,24\nOscar,", &Config::default()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&analysis.document.to_json().unwrap()).unwrap();

    assert_eq!(json["header"], serde_json::json!(["nombre", "edad"]));
    assert_eq!(json["rows"][1], serde_json::json!(["Oscar", ""]));
    assert_eq!(json["total_fields"], 6);
}
