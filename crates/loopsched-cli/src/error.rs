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

//! Error types for the loopsched CLI.

use loopsched_core::AnalysisError;
use loopsched_csv::CsvError;
use loopsched_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
///
/// Library errors are wrapped unchanged so their row, column and loop
/// context reaches the user.
///
/// # Examples
///
/// ```
/// use loopsched_cli::error::CliError;
/// use std::path::PathBuf;
///
/// let err = CliError::FileTooLarge {
///     path: PathBuf::from("results.csv"),
///     actual: 2048,
///     max: 1024,
///     max_mb: 0,
/// };
/// assert!(err.to_string().contains("too large"));
/// ```
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error(
        "File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). \
         Set LOOPSCHED_MAX_FILE_SIZE (in bytes) to raise the limit.",
        path.display()
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The results file could not be loaded.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// Aggregation, selection or chart building failed.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// Chart or summary output failed.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// A command-line argument is unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use loopsched_core::LoopId;

    #[test]
    fn test_library_errors_keep_their_message() {
        let err: CliError = AnalysisError::NoMatchingGroups {
            threads: 6,
            loop_id: LoopId::Two,
        }
        .into();
        assert_eq!(err.to_string(), "No measurements for loop 2 on 6 threads");

        let err: CliError = CsvError::MissingColumn("time".to_string()).into();
        assert_eq!(err.to_string(), "Missing required column: time");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CliError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.csv': not found");
    }
}
