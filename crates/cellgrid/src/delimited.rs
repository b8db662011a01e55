//! Delimited text in and out.
//!
//! [`Tokenizer`] turns delimited text into rows of strings; [`CsvTokenizer`]
//! is the `csv`-crate implementation used by
//! [`TableFiller::fill_from_delimited_text`](crate::TableFiller::fill_from_delimited_text).
//! [`write_delimited`] goes the other way and applies the quoting rule: a
//! value containing the delimiter is wrapped in double quotes.
//!
//! ```rust
//! use cellgrid::delimited::{write_delimited, CsvTokenizer, Tokenizer};
//!
//! let rows = vec![vec!["city", "note"], vec!["Ghent", "a;b"]];
//! let text = write_delimited(&rows, b';').unwrap();
//! assert_eq!(text, "city;note\nGhent;\"a;b\"\n");
//!
//! let parsed = CsvTokenizer::new().parse(&text, b';').unwrap();
//! assert_eq!(parsed[1], vec!["Ghent", "a;b"]);
//! ```

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{GridError, Result};

/// Splits delimited text into rows of cell values.
pub trait Tokenizer {
    /// Parses `text` into rows using `delimiter` between fields.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Malformed`] when the text violates the
    /// tokenizer's quoting or record rules.
    fn parse(&self, text: &str, delimiter: u8) -> Result<Vec<Vec<String>>>;
}

/// [`Tokenizer`] built on the `csv` crate.
///
/// Fields may be wrapped in double quotes, with `""` standing for a literal
/// quote. A quoted field that is still open at the end of the text is
/// [`GridError::Malformed`]. Blank lines are skipped.
///
/// Records may have different lengths; the filler pads and cuts them.
/// [`strict`](CsvTokenizer::strict) adds an opt-in record-length check on
/// top of the quoting rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvTokenizer {
    strict: bool,
}

impl CsvTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, every record must have as many fields as the first one,
    /// and a ragged record is reported as [`GridError::Malformed`].
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Tokenizer for CsvTokenizer {
    fn parse(&self, text: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
        if let Some(line) = unclosed_quote(text, delimiter) {
            return Err(GridError::Malformed {
                line: Some(line),
                message: "quoted field is never closed".to_string(),
                source: None,
            });
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(!self.strict)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}

/// Line of a quoted field that runs to the end of `text`, if any.
///
/// Follows the reader's quoting rules: a quote opens a quoted field only at
/// the start of a field, `""` inside it is an escaped quote, and quotes in
/// unquoted fields are literal.
fn unclosed_quote(text: &str, delimiter: u8) -> Option<u64> {
    let mut line = 1u64;
    let mut field_start = true;
    let mut open_at: Option<u64> = None;
    let mut bytes = text.bytes().peekable();

    while let Some(b) = bytes.next() {
        if open_at.is_some() {
            match b {
                b'"' if bytes.peek() == Some(&b'"') => {
                    bytes.next();
                }
                b'"' => open_at = None,
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if field_start => {
                open_at = Some(line);
                field_start = false;
            }
            b'\n' => {
                line += 1;
                field_start = true;
            }
            b'\r' => field_start = true,
            _ if b == delimiter => field_start = true,
            _ => field_start = false,
        }
    }

    open_at
}

/// Writes rows as delimited text, one line per row.
///
/// Values containing the delimiter, a double quote, or a line break are
/// wrapped in double quotes, so [`CsvTokenizer`] reads them back unchanged.
pub fn write_delimited<S: AsRef<str>>(rows: &[Vec<S>], delimiter: u8) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        wtr.write_record(row.iter().map(|v| v.as_ref()))
            .map_err(|e| GridError::Io(e.into()))?;
    }

    let bytes = wtr.into_inner().map_err(|e| GridError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| GridError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semicolon_rows() {
        let rows = CsvTokenizer::new()
            .parse("h1;h2;h3\na;b;c\nd;e;f\n", b';')
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["h1", "h2", "h3"]);
        assert_eq!(rows[2], vec!["d", "e", "f"]);
    }

    #[test]
    fn test_parse_quoted_delimiter() {
        let rows = CsvTokenizer::new()
            .parse("name,desc\nwidget,\"small, blue\"\n", b',')
            .unwrap();
        assert_eq!(rows[1], vec!["widget", "small, blue"]);
    }

    #[test]
    fn test_parse_escaped_quote() {
        let rows = CsvTokenizer::new()
            .parse("\"say \"\"hi\"\"\"\n", b',')
            .unwrap();
        assert_eq!(rows[0], vec!["say \"hi\""]);
    }

    #[test]
    fn test_parse_ragged_rows_when_flexible() {
        let rows = CsvTokenizer::new().parse("a;b;c\nx\n", b';').unwrap();
        assert_eq!(rows[1], vec!["x"]);
    }

    #[test]
    fn test_strict_record_length_check() {
        let err = CsvTokenizer::new()
            .strict(true)
            .parse("a;b;c\nx\n", b';')
            .unwrap_err();
        assert!(matches!(
            err,
            GridError::Malformed {
                source: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_unclosed_quote_is_malformed() {
        let err = CsvTokenizer::new()
            .parse("h1;h2\na;\"b\nc;d\n", b';')
            .unwrap_err();
        match err {
            GridError::Malformed { line, source, .. } => {
                assert_eq!(line, Some(2));
                assert!(source.is_none());
            }
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unclosed_quote_after_escaped_quote() {
        let err = CsvTokenizer::new()
            .parse("\"say \"\"hi\"\"\n", b',')
            .unwrap_err();
        assert!(matches!(err, GridError::Malformed { line: Some(1), .. }));
    }

    #[test]
    fn test_quotes_inside_unquoted_fields_are_literal() {
        let rows = CsvTokenizer::new()
            .parse("pipe;5\" long\n", b';')
            .unwrap();
        assert_eq!(rows[0], vec!["pipe", "5\" long"]);
    }

    #[test]
    fn test_quoted_line_break_is_one_field() {
        let rows = CsvTokenizer::new()
            .parse("a;\"two\nlines\"\nb;c\n", b';')
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "two\nlines"]);
        assert_eq!(rows[1], vec!["b", "c"]);
    }

    #[test]
    fn test_parse_empty_text() {
        let rows = CsvTokenizer::new().parse("", b';').unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_quotes_only_when_needed() {
        let rows = vec![vec!["plain", "has;delim", "has \"quote\""]];
        let text = write_delimited(&rows, b';').unwrap();
        assert_eq!(text, "plain;\"has;delim\";\"has \"\"quote\"\"\"\n");
    }

    #[test]
    fn test_write_ragged_rows() {
        let rows = vec![vec!["a", "b", "c"], vec!["x"]];
        let text = write_delimited(&rows, b',').unwrap();
        assert_eq!(text, "a,b,c\nx\n");
    }
}
