//! source — text adapter between raw data and a validated [`Series`].
//!
//! Purpose
//! -------
//! Parse an ordered sequence of reals from whitespace-delimited text,
//! skipping a caller-specified number of header lines, and hand the
//! result to [`Series`] for validation. This is the crate's only
//! ingestion surface: callers supply any `BufRead` (a file, an
//! in-memory string, a decompressed download), and the crate never
//! touches the network itself.
//!
//! Key behaviors
//! -------------
//! - Values are split on arbitrary whitespace, so one-value-per-line and
//!   many-values-per-line layouts both parse; blank lines after the
//!   header are skipped.
//! - Parse failures carry the 1-based line number and the offending
//!   token; I/O failures are passed through with the line they occurred
//!   on.
//! - The parsed values go through [`Series::from_vec`], so emptiness and
//!   finiteness are enforced by the same guard as every other
//!   construction path.
//!
//! Invariants & assumptions
//! ------------------------
//! - Header lines are skipped verbatim; their content is never parsed.
//! - The observation order of the returned series is the textual order
//!   of the tokens.
//!
//! Downstream usage
//! ----------------
//! - Typical use wraps a file in a `BufReader` and feeds the result to
//!   the diagnostic pipeline:
//!
//!   ```rust
//!   use series_diagnostics::source::read_series;
//!
//!   let text = "resistance of a standard ohm\n27.8 27.9\n27.7\n";
//!   let series = read_series(text.as_bytes(), 1)?;
//!   assert_eq!(series.len(), 3);
//!   # Ok::<(), series_diagnostics::source::SourceError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests cover header skipping, mixed layouts, the parse-failure
//!   payload, and propagation of the series construction guard.

use std::io::BufRead;

use crate::series::{Series, SeriesError};

pub type SourceResult<T> = Result<T, SourceError>;

/// SourceError — failures while reading a series from text.
///
/// Variants
/// --------
/// - `Io { line, error }`
///   The underlying reader failed; `line` is the 1-based number of the
///   line being read.
/// - `ParseValue { line, token }`
///   A whitespace-delimited token did not parse as an `f64`.
/// - `Series(SeriesError)`
///   The parsed values failed series validation (empty after the header,
///   or a non-finite value such as a literal `NaN`).
#[derive(Debug)]
pub enum SourceError {
    Io { line: usize, error: std::io::Error },
    ParseValue { line: usize, token: String },
    Series(SeriesError),
}

impl From<SeriesError> for SourceError {
    fn from(error: SeriesError) -> Self {
        SourceError::Series(error)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io { line, error } => {
                write!(f, "I/O failure while reading line {line}: {error}.")
            }
            SourceError::ParseValue { line, token } => {
                write!(f, "Unparseable value {token:?} on line {line}.")
            }
            SourceError::Series(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { error, .. } => Some(error),
            SourceError::ParseValue { .. } => None,
            SourceError::Series(error) => Some(error),
        }
    }
}

/// Read a whitespace-delimited series, skipping `skip_header_lines`.
///
/// Parameters
/// ----------
/// - `reader`: `impl BufRead`
///   Source of the text; consumed to end of input.
/// - `skip_header_lines`: `usize`
///   Number of leading lines to discard without parsing.
///
/// Returns
/// -------
/// `SourceResult<Series>`
///   - `Ok(series)` with the values in textual order.
///   - `Err(SourceError)` on I/O, parse, or validation failure.
///
/// Errors
/// ------
/// - `SourceError::Io` when the reader fails mid-stream.
/// - `SourceError::ParseValue` for the first non-numeric token.
/// - `SourceError::Series` when no values remain after the header or a
///   parsed value is non-finite.
pub fn read_series(reader: impl BufRead, skip_header_lines: usize) -> SourceResult<Series> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|error| SourceError::Io { line: line_no, error })?;

        if index < skip_header_lines {
            continue;
        }

        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| SourceError::ParseValue { line: line_no, token: token.to_string() })?;
            values.push(value);
        }
    }

    Ok(Series::from_vec(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Header skipping and mixed one/many-values-per-line layouts.
    // - Blank-line tolerance after the header.
    // - The parse-failure payload (line number and token).
    // - Propagation of the series construction guard for empty and
    //   non-finite input.
    //
    // They intentionally DO NOT cover:
    // - Actual file or network I/O; any `BufRead` behaves identically.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify header skipping and whitespace-delimited parsing across
    // mixed line layouts.
    //
    // Given
    // -----
    // - Two header lines, then values split across lines, with a blank
    //   line in between.
    //
    // Expect
    // ------
    // - A 5-point series in textual order.
    fn read_series_skips_header_and_parses_mixed_layout() {
        let text = "station 42\nvalues follow\n1.5 2.5\n\n3.5\n4.5 5.5\n";

        let series = read_series(text.as_bytes(), 2).expect("should parse");

        assert_eq!(series.as_slice(), &[1.5, 2.5, 3.5, 4.5, 5.5]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that header content is never parsed, even when it is not
    // numeric.
    //
    // Given
    // -----
    // - A header line that would fail `f64` parsing.
    //
    // Expect
    // ------
    // - The data lines parse normally.
    fn read_series_never_parses_header_content() {
        let text = "resistance of a standard ohm (megohms)\n27.8\n27.9\n";

        let series = read_series(text.as_bytes(), 1).expect("should parse");

        assert_eq!(series.len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify the parse-failure payload carries the line number and the
    // offending token.
    //
    // Given
    // -----
    // - A bad token "2.x" on line 3 (after one header line).
    //
    // Expect
    // ------
    // - `ParseValue { line: 3, token: "2.x" }`.
    fn read_series_reports_line_and_token_on_parse_failure() {
        let text = "header\n1.0\n2.x\n3.0\n";

        match read_series(text.as_bytes(), 1) {
            Err(SourceError::ParseValue { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "2.x");
            }
            other => panic!("expected ParseValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the series construction guard fires for empty and
    // non-finite input.
    //
    // Given
    // -----
    // - Text with only a header, and text containing a literal NaN
    //   (which `f64::from_str` accepts).
    //
    // Expect
    // ------
    // - `Series(EmptySeries)` and `Series(NonFiniteValue)` respectively.
    fn read_series_propagates_series_validation() {
        match read_series("header only\n".as_bytes(), 1) {
            Err(SourceError::Series(SeriesError::EmptySeries)) => (),
            other => panic!("expected EmptySeries, got {other:?}"),
        }

        match read_series("1.0 NaN 3.0\n".as_bytes(), 0) {
            Err(SourceError::Series(SeriesError::NonFiniteValue { index, .. })) => {
                assert_eq!(index, 1);
            }
            other => panic!("expected NonFiniteValue, got {other:?}"),
        }
    }
}
