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

//! Summary export of the aggregate table and the best-configuration report.

use crate::error::Result;
use loopsched_core::{AggregateTable, BestConfigReport, GroupKey, GroupStats, LoopId, Schedule};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One aggregate group, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Schedule label.
    pub schedule: Schedule,
    /// Chunk size (`2^k`), if the group has one.
    pub chunksize: Option<u32>,
    /// Thread count.
    pub num_threads: u32,
    /// Loop number.
    #[serde(rename = "loop")]
    pub loop_id: LoopId,
    /// Number of trials.
    pub count: usize,
    /// Mean time in seconds.
    pub mean: f64,
    /// Sample standard deviation, absent for single-trial groups.
    pub std: Option<f64>,
}

impl SummaryRow {
    /// Flattens one group.
    pub fn from_group(key: &GroupKey, stats: &GroupStats) -> Self {
        Self {
            schedule: key.schedule,
            chunksize: key.chunk.map(|exponent| exponent.chunksize()),
            num_threads: key.num_threads,
            loop_id: key.loop_id,
            count: stats.count,
            mean: stats.mean,
            std: stats.std_dev,
        }
    }
}

/// One row per group, in table order.
pub fn summary_rows(table: &AggregateTable) -> Vec<SummaryRow> {
    table
        .iter()
        .map(|(key, stats)| SummaryRow::from_group(key, stats))
        .collect()
}

/// The aggregate table as a pretty-printed JSON array.
pub fn summary_json(table: &AggregateTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summary_rows(table))?)
}

/// The aggregate table as a Markdown table.
pub fn summary_markdown(table: &AggregateTable) -> String {
    let mut md = String::new();

    md.push_str("| Schedule | Chunk size | Threads | Loop | Count | Mean (s) | Std (s) |\n");
    md.push_str("|----------|------------|---------|------|-------|----------|---------|\n");

    for row in summary_rows(table) {
        let chunk = row
            .chunksize
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let std = row
            .std
            .map(|s| format!("{:.6}", s))
            .unwrap_or_else(|| "N/A".to_string());

        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.6} | {} |\n",
            row.schedule, chunk, row.num_threads, row.loop_id, row.count, row.mean, std
        ));
    }

    md
}

/// Report lines as a Markdown document.
pub fn report_markdown(lines: &[BestConfigReport]) -> String {
    let mut md = String::new();

    md.push_str("# Best configurations\n\n");
    for line in lines {
        md.push_str(&format!("- {}\n", line));
    }

    md
}

/// Writes the Markdown summary to `path`.
pub fn export_markdown(table: &AggregateTable, path: &Path) -> Result<()> {
    fs::write(path, summary_markdown(table))?;
    Ok(())
}

/// Writes the JSON summary to `path`.
pub fn export_json(table: &AggregateTable, path: &Path) -> Result<()> {
    fs::write(path, summary_json(table)?)?;
    Ok(())
}
