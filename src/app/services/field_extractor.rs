//! Header parsing and column name derivation.
//!
//! The first line of the source file is split on the configured delimiter
//! and every token is reduced to word characters (`[A-Za-z0-9_]`). No
//! quoting rules apply to the header, and names are neither deduplicated nor
//! case-folded; collisions are left for the database to reject.

use crate::app::adapters::source_file::open_source;
use crate::config::Delimiter;
use crate::{Error, Result};
use regex::Regex;
use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is a valid regex")
});

/// Remove every run of non-word characters from a header token
pub fn sanitize_field_name(token: &str) -> String {
    NON_WORD_RUN.replace_all(token, "").into_owned()
}

/// Split a header line on the delimiter and sanitize each token
///
/// An empty line yields no fields.
pub fn extract_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    line.split(delimiter.as_char())
        .map(sanitize_field_name)
        .collect()
}

/// Read the first line of a source file, BOM removed and whitespace trimmed
pub fn read_header_line(path: &Path) -> Result<String> {
    let mut reader = open_source(path)?;
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| Error::io(format!("Failed to read header line from {}", path.display()), e))?;

    Ok(line.trim().to_string())
}

/// Derive the column names for a source file
pub fn extract_fields_from_file(path: &Path, delimiter: Delimiter) -> Result<Vec<String>> {
    let header = read_header_line(path)?;
    let fields = extract_fields(&header, delimiter);

    debug!(
        "Extracted {} fields from header of {}: {:?}",
        fields.len(),
        path.display(),
        fields
    );

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    const SAMPLE_HEADERS: &[&str] = &[
        "First Name,Last-Name,Zip Code",
        "id|name|e-mail address",
        "a\tb\t\tc",
        "  spaced  ,(parens),__under__,",
        "unicode café,naïve,日本",
        "!!!,???,***",
        ",,,",
        "single",
    ];

    #[test]
    fn test_example_header() {
        let fields = extract_fields("First Name,Last-Name,Zip Code", Delimiter::Comma);
        assert_eq!(fields, vec!["FirstName", "LastName", "ZipCode"]);
    }

    #[test]
    fn test_sanitize_keeps_word_characters_in_order() {
        assert_eq!(sanitize_field_name("Total $ (USD) 2024_q1"), "TotalUSD2024_q1");
        assert_eq!(sanitize_field_name("already_clean"), "already_clean");
        assert_eq!(sanitize_field_name("a-b-c"), "abc");
    }

    #[test]
    fn test_sanitize_all_non_word_becomes_empty() {
        assert_eq!(sanitize_field_name("---"), "");
        assert_eq!(sanitize_field_name("   "), "");
        assert_eq!(sanitize_field_name(""), "");
    }

    #[test]
    fn test_sanitize_strips_non_ascii_letters() {
        assert_eq!(sanitize_field_name("café"), "caf");
        assert_eq!(sanitize_field_name("日本"), "");
    }

    #[test]
    fn test_no_case_normalization_or_dedup() {
        let fields = extract_fields("Name,name,NAME,na-me", Delimiter::Comma);
        assert_eq!(fields, vec!["Name", "name", "NAME", "name"]);
    }

    #[test]
    fn test_field_count_matches_token_count() {
        for header in SAMPLE_HEADERS {
            for delimiter in [Delimiter::Comma, Delimiter::Pipe, Delimiter::Tab] {
                let fields = extract_fields(header, delimiter);
                let tokens = header.split(delimiter.as_char()).count();
                assert_eq!(fields.len(), tokens, "header {:?} on {:?}", header, delimiter);
            }
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for header in SAMPLE_HEADERS {
            for token in header.split(',') {
                let once = sanitize_field_name(token);
                assert_eq!(sanitize_field_name(&once), once);
            }
        }
    }

    #[test]
    fn test_output_contains_only_word_characters() {
        for header in SAMPLE_HEADERS {
            for field in extract_fields(header, Delimiter::Comma) {
                assert!(field.chars().all(is_word_char), "unexpected character in {:?}", field);
            }
        }
    }

    #[test]
    fn test_delimiter_is_exact() {
        let fields = extract_fields("a,b|c", Delimiter::Pipe);
        assert_eq!(fields, vec!["ab", "c"]);

        let fields = extract_fields("a b\tc", Delimiter::Tab);
        assert_eq!(fields, vec!["ab", "c"]);
    }

    #[test]
    fn test_empty_line_yields_no_fields() {
        assert!(extract_fields("", Delimiter::Comma).is_empty());
    }

    #[test]
    fn test_read_header_line_strips_bom_and_line_ending() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFFirst Name,Last-Name\r\nAda,Lovelace\r\n")
            .unwrap();

        let header = read_header_line(file.path()).unwrap();
        assert_eq!(header, "First Name,Last-Name");
    }

    #[test]
    fn test_extract_fields_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Station ID|Obs. Date|Temp (C)").unwrap();
        writeln!(file, "1|2024-01-01|3.5").unwrap();

        let fields = extract_fields_from_file(file.path(), Delimiter::Pipe).unwrap();
        assert_eq!(fields, vec!["StationID", "ObsDate", "TempC"]);
    }

    #[test]
    fn test_extract_fields_from_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let fields = extract_fields_from_file(file.path(), Delimiter::Comma).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_invalid_utf8_header_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,\xFF\xFE,b\n").unwrap();

        let result = read_header_line(file.path());
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
