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

//! Loading benchmark results from CSV.

use crate::error::{CsvError, Result};
use loopsched_core::{ChunkExponent, LoopId, Measurement, Schedule};
use std::io::Read;
use tracing::debug;

/// Default maximum number of rows (10 million).
///
/// A complete benchmark sweep is a few thousand rows; the limit only guards
/// against feeding the loader an unrelated, very large file.
pub const DEFAULT_MAX_ROWS: usize = 10_000_000;

/// Columns every result file must have, in their canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["schedule", "chunksize", "num_threads", "loop", "time"];

const SCHEDULE: usize = 0;
const CHUNKSIZE: usize = 1;
const NUM_THREADS: usize = 2;
const LOOP: usize = 3;
const TIME: usize = 4;

/// Configuration for CSV loading.
///
/// # Examples
///
/// ```
/// use loopsched_csv::{from_csv_with_config, FromCsvConfig};
///
/// let csv = "schedule;chunksize;num_threads;loop;time\nsingle;;1;1;4.0\n";
/// let config = FromCsvConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// let measurements = from_csv_with_config(csv, &config).unwrap();
/// assert_eq!(measurements.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    ///
    /// Header names are always trimmed.
    pub trim: bool,

    /// Maximum number of data rows to parse (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse a results CSV string with default configuration.
///
/// Columns are matched by header name and may appear in any order; extra
/// columns are ignored. A blank chunk size or the literal `nan` (any case)
/// means the run had none.
///
/// # Errors
///
/// Any malformed row fails the whole load. See [`CsvError`].
///
/// # Examples
///
/// ```
/// use loopsched_csv::from_csv;
/// use loopsched_core::{LoopId, Schedule};
///
/// let csv = "schedule,chunksize,num_threads,loop,time\n\
///            dynamic,8,6,1,0.25\n\
///            auto,nan,6,2,0.5\n";
/// let measurements = from_csv(csv).unwrap();
///
/// assert_eq!(measurements[0].schedule, Schedule::Dynamic);
/// assert_eq!(measurements[0].chunksize, Some(8));
/// assert_eq!(measurements[1].chunksize, None);
/// assert_eq!(measurements[1].loop_id, LoopId::Two);
/// ```
pub fn from_csv(csv: &str) -> Result<Vec<Measurement>> {
    from_csv_with_config(csv, &FromCsvConfig::default())
}

/// Parse a results CSV string with custom configuration.
pub fn from_csv_with_config(csv: &str, config: &FromCsvConfig) -> Result<Vec<Measurement>> {
    from_csv_reader_with_config(csv.as_bytes(), config)
}

/// Parse results from any reader with default configuration.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Measurement>> {
    from_csv_reader_with_config(reader, &FromCsvConfig::default())
}

/// Parse results from any reader with custom configuration.
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    config: &FromCsvConfig,
) -> Result<Vec<Measurement>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let width = headers.len();
    let columns = locate_columns(&headers)?;

    let mut measurements = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        let row = record_idx + 1;

        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: row,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            line: row + 1,
            message: e.to_string(),
        })?;

        if record.len() != width {
            return Err(CsvError::WidthMismatch {
                expected: width,
                actual: record.len(),
                row,
            });
        }

        measurements.push(parse_record(&record, &columns, row)?);
    }

    debug!(rows = measurements.len(), "loaded measurements");
    Ok(measurements)
}

fn locate_columns(headers: &csv::StringRecord) -> Result<[usize; 5]> {
    let mut positions = [None; 5];

    for (position, header) in headers.iter().enumerate() {
        let name = header.trim();
        if let Some(slot) = REQUIRED_COLUMNS.iter().position(|c| *c == name) {
            if positions[slot].is_some() {
                return Err(CsvError::InvalidHeader {
                    position,
                    reason: format!("duplicate column '{}'", name),
                });
            }
            positions[slot] = Some(position);
        }
    }

    let mut columns = [0; 5];
    for (slot, position) in positions.iter().enumerate() {
        columns[slot] =
            position.ok_or_else(|| CsvError::MissingColumn(REQUIRED_COLUMNS[slot].to_string()))?;
    }
    Ok(columns)
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &[usize; 5],
    row: usize,
) -> Result<Measurement> {
    let field = |slot: usize| record.get(columns[slot]).unwrap_or("");
    let invalid = |slot: usize, reason: String| CsvError::InvalidValue {
        row,
        column: REQUIRED_COLUMNS[slot].to_string(),
        value: field(slot).to_string(),
        reason,
    };

    let schedule: Schedule = field(SCHEDULE)
        .parse()
        .map_err(|_| invalid(SCHEDULE, "unknown schedule".to_string()))?;

    let chunksize = parse_chunksize(field(CHUNKSIZE)).map_err(|reason| invalid(CHUNKSIZE, reason))?;

    let num_threads: u32 = field(NUM_THREADS)
        .parse()
        .map_err(|_| invalid(NUM_THREADS, "expected a non-negative integer".to_string()))?;

    let loop_number: u8 = field(LOOP)
        .parse()
        .map_err(|_| invalid(LOOP, "expected 1 or 2".to_string()))?;
    let loop_id = LoopId::try_from(loop_number)
        .map_err(|_| invalid(LOOP, "expected 1 or 2".to_string()))?;

    let time: f64 = field(TIME)
        .parse()
        .map_err(|_| invalid(TIME, "expected a number".to_string()))?;

    let measurement = Measurement::new(schedule, chunksize, num_threads, loop_id, time)
        .map_err(|source| CsvError::InvalidRecord { row, source })?;

    if let Some(chunksize) = measurement.chunksize {
        ChunkExponent::from_chunksize(chunksize)
            .map_err(|source| CsvError::InvalidRecord { row, source })?;
    }

    Ok(measurement)
}

/// `None` for blank or `nan`; integral floats such as `4.0` are accepted.
fn parse_chunksize(field: &str) -> std::result::Result<Option<u32>, String> {
    if field.trim().is_empty() || field.trim().eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if let Ok(value) = field.parse::<u32>() {
        return Ok(Some(value));
    }

    let value: f64 = field
        .parse()
        .map_err(|_| "expected a positive integer, blank or nan".to_string())?;
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(Some(value as u32))
    } else {
        Err("chunk size must be a whole number".to_string())
    }
}
