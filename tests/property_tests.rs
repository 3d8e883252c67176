//! Property-based tests using proptest
//!
//! These tests check the parser and writer against generated tables.

use gradecsv::{extract, parse, round_grade, write_csv, AdvisoryConfig, Document};
use proptest::prelude::*;

fn document(input: &str) -> Document {
    extract(&parse(input).unwrap(), &AdvisoryConfig::disabled())
}

fn join(rows: &[Vec<String>], line_ending: &str) -> String {
    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join(line_ending)
}

fn plain_table() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z0-9_.]{1,6}", 1..6),
        1..6,
    )
}

fn awkward_table() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-z ,\"\r\n\t.]{0,8}", 1..5),
        1..5,
    )
}

// =============================================================================
// Parsing
// =============================================================================

proptest! {
    /// Unquoted, whitespace-free tables come back unchanged
    #[test]
    fn test_unquoted_round_trip(table in plain_table()) {
        let doc = document(&join(&table, "\n"));

        prop_assert_eq!(doc.header(), table[0].as_slice());
        prop_assert_eq!(doc.rows(), &table[1..]);
    }

    /// `\n` and `\r\n` row separators give the same document
    #[test]
    fn test_row_separator_tolerance(table in plain_table(), trailing in any::<bool>()) {
        let mut lf = join(&table, "\n");
        let mut crlf = join(&table, "\r\n");
        if trailing {
            lf.push('\n');
            crlf.push_str("\r\n");
        }

        prop_assert_eq!(document(&lf), document(&crlf));
    }

    /// Quoting with doubled quotes decodes to the original text
    #[test]
    fn test_quote_escaping(value in "[a-z \"]{0,12}") {
        let input = format!("\"{}\"", value.replace('"', "\"\""));
        let doc = document(&input);

        prop_assert_eq!(doc.header(), &[value][..]);
    }

    /// Commas in a row always produce one more field than there are commas
    #[test]
    fn test_field_count_matches_commas(line in "[a-z,]{0,20}") {
        let doc = document(&line);
        prop_assert_eq!(doc.header().len(), line.matches(',').count() + 1);
    }
}

// =============================================================================
// Writing
// =============================================================================

proptest! {
    /// Any table written with the default writer parses back unchanged
    #[test]
    fn test_writer_round_trip(table in awkward_table()) {
        let text = write_csv(&table[0], &table[1..]);
        let doc = document(&text);

        prop_assert_eq!(doc.header(), table[0].as_slice());
        prop_assert_eq!(doc.rows(), &table[1..]);
    }
}

// =============================================================================
// Rounding
// =============================================================================

proptest! {
    /// Below the pass mark the rounded grade is zero
    #[test]
    fn test_failing_grades_round_to_zero(grade in 0.0f64..6.999) {
        prop_assert_eq!(round_grade(grade, 7.0), 0.0);
    }

    /// Passing grades round to a whole number within half a point
    #[test]
    fn test_passing_grades_round_to_nearest(grade in 7.0f64..10.0) {
        let rounded = round_grade(grade, 7.0);
        prop_assert_eq!(rounded.fract(), 0.0);
        prop_assert!((rounded - grade).abs() <= 0.5);
    }
}
