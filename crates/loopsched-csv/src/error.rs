// Dweve loopsched - Loop Schedule Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for CSV loading and export.

use loopsched_core::AnalysisError;
use thiserror::Error;

/// CSV loading and export error types.
///
/// Every loading error is fatal for the whole file: a single malformed row
/// rejects the input, and the error names the offending row and column.
///
/// # Examples
///
/// ```
/// use loopsched_csv::CsvError;
///
/// let err = CsvError::InvalidValue {
///     row: 3,
///     column: "time".to_string(),
///     value: "fast".to_string(),
///     reason: "expected a number".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Invalid value 'fast' in column 'time' at row 3: expected a number"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based, header included).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Missing required column in CSV data.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_csv::CsvError;
    ///
    /// let err = CsvError::MissingColumn("time".to_string());
    /// assert_eq!(err.to_string(), "Missing required column: time");
    /// ```
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Invalid header format or content.
    #[error("Invalid header at position {position}: {reason}")]
    InvalidHeader {
        /// Position of the invalid header (0-based).
        position: usize,
        /// Reason the header is invalid.
        reason: String,
    },

    /// Row has wrong number of columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_csv::CsvError;
    ///
    /// let err = CsvError::WidthMismatch {
    ///     expected: 5,
    ///     actual: 3,
    ///     row: 10,
    /// };
    /// assert!(err.to_string().contains("expected 5 columns"));
    /// assert!(err.to_string().contains("got 3"));
    /// ```
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        /// Expected number of columns.
        expected: usize,
        /// Actual number of columns in the row.
        actual: usize,
        /// Data row where the mismatch occurred (1-based).
        row: usize,
    },

    /// A field could not be parsed.
    #[error("Invalid value '{value}' in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        /// Data row (1-based).
        row: usize,
        /// Column name.
        column: String,
        /// Raw field content.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A row parsed but does not describe a valid measurement.
    #[error("Invalid measurement at row {row}: {source}")]
    InvalidRecord {
        /// Data row (1-based).
        row: usize,
        /// Validation failure.
        source: AnalysisError,
    },

    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Row count exceeded security limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 1_000,
    ///     actual: 1_001,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Actual row count encountered.
        actual: usize,
    },

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvError::WidthMismatch { row, .. }
            | CsvError::InvalidValue { row, .. }
            | CsvError::InvalidRecord { row, .. } => Some(*row),
            CsvError::ParseError { line, .. } => line.checked_sub(1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopsched_core::LoopId;

    #[test]
    fn test_invalid_record_display() {
        let err = CsvError::InvalidRecord {
            row: 7,
            source: AnalysisError::invalid_measurement("num_threads must be positive"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid measurement at row 7: Invalid measurement: num_threads must be positive"
        );
        assert_eq!(err.row(), Some(7));
    }

    #[test]
    fn test_parse_error_row() {
        let err = CsvError::ParseError {
            line: 4,
            message: "unterminated quote".to_string(),
        };
        assert_eq!(err.row(), Some(3));
        assert_eq!(CsvError::MissingColumn("loop".to_string()).row(), None);
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;

        let err = CsvError::InvalidRecord {
            row: 1,
            source: AnalysisError::NoMatchingGroups {
                threads: 6,
                loop_id: LoopId::One,
            },
        };
        assert!(err.source().is_some());
    }
}
