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

//! Summary export of the aggregate table as CSV.

use crate::error::{CsvError, Result};
use loopsched_core::AggregateTable;
use std::io::Write;

/// Columns of the summary export.
pub const SUMMARY_COLUMNS: [&str; 7] = [
    "schedule",
    "chunksize",
    "num_threads",
    "loop",
    "count",
    "mean",
    "std",
];

/// Configuration for summary export.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,
    /// Whether to write the header row (default: `true`).
    pub include_headers: bool,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
        }
    }
}

/// Writes one row per group, in table order.
///
/// The chunk size is written as `2^k` and left blank when absent; the
/// standard deviation is left blank for single-trial groups.
///
/// # Examples
///
/// ```
/// use loopsched_core::{AggregateTable, LoopId, Measurement, Schedule};
/// use loopsched_csv::to_csv;
///
/// let measurements = vec![
///     Measurement::new(Schedule::Guided, Some(6), 4, LoopId::One, 1.0).unwrap(),
///     Measurement::new(Schedule::Guided, Some(8), 4, LoopId::One, 3.0).unwrap(),
///     Measurement::new(Schedule::Single, None, 1, LoopId::One, 8.0).unwrap(),
/// ];
/// let table = AggregateTable::from_measurements(&measurements).unwrap();
///
/// let csv = to_csv(&table).unwrap();
/// let lines: Vec<&str> = csv.lines().collect();
/// assert_eq!(lines[0], "schedule,chunksize,num_threads,loop,count,mean,std");
/// assert!(lines[1].starts_with("guided,8,4,1,2,2,1.41421"));
/// assert_eq!(lines[2], "single,,1,1,1,8,");
/// ```
pub fn to_csv(table: &AggregateTable) -> Result<String> {
    to_csv_with_config(table, &ToCsvConfig::default())
}

/// Summary export with custom configuration.
pub fn to_csv_with_config(table: &AggregateTable, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(64 * (table.len() + 1));
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Summary export into any writer.
pub fn to_csv_writer<W: Write>(table: &AggregateTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, &ToCsvConfig::default())
}

/// Summary export into any writer with custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    table: &AggregateTable,
    writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(SUMMARY_COLUMNS)?;
    }

    for (key, stats) in table {
        let chunk = key
            .chunk
            .map(|exponent| exponent.chunksize().to_string())
            .unwrap_or_default();
        let std = stats.std_dev.map(|s| s.to_string()).unwrap_or_default();

        wtr.write_record([
            key.schedule.as_str().to_string(),
            chunk,
            key.num_threads.to_string(),
            key.loop_id.to_string(),
            stats.count.to_string(),
            stats.mean.to_string(),
            std,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
