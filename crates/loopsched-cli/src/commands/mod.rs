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

//! CLI command implementations

mod charts;
mod report;
mod run;
mod summary;

pub use charts::charts;
pub use report::report;
pub use run::run;
pub use summary::summary;

use crate::error::{CliError, Result};
use loopsched_core::{AggregateTable, AnalysisConfig};
use loopsched_csv::{from_csv_with_config, FromCsvConfig};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Default maximum input size (1 GB).
/// Can be overridden via the LOOPSCHED_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "LOOPSCHED_MAX_FILE_SIZE";

/// Resolved arguments of an analysis command.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Results file path.
    pub file: String,
    /// Field delimiter of the results file.
    pub delimiter: u8,
    /// Thread count and loops to analyse.
    pub config: AnalysisConfig,
}

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any memory
/// is allocated for their contents.
///
/// # Errors
///
/// - [`CliError::Io`] if the metadata or contents cannot be read, or the
///   file is not valid UTF-8.
/// - [`CliError::FileTooLarge`] if the file exceeds the limit.
pub fn read_file(path: &str) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::FileTooLarge {
            path: path.into(),
            actual: metadata.len(),
            max: max_file_size,
            max_mb: max_file_size / (1024 * 1024),
        });
    }

    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Write to a file, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io("<stdout>", e)),
    }
}

/// Reads, parses and aggregates a results file.
pub fn load_table(path: &str, delimiter: u8) -> Result<AggregateTable> {
    let content = read_file(path)?;
    let config = FromCsvConfig {
        delimiter,
        ..FromCsvConfig::default()
    };
    let measurements = from_csv_with_config(&content, &config)?;
    let table = AggregateTable::from_measurements(&measurements)?;

    info!(
        path,
        measurements = measurements.len(),
        groups = table.len(),
        "loaded results"
    );
    Ok(table)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_missing() {
        let err = read_file("/nonexistent/results.csv").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_load_table_with_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "schedule;chunksize;num_threads;loop;time\n\
             dynamic;4;6;1;1.0\n\
             dynamic;4;6;1;3.0\n"
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let table = load_table(path, b';').unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.total_count(), 2);
        assert!(load_table(path, b',').is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output("hello\n", path.to_str()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
    }
}
