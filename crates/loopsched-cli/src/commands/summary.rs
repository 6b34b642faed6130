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

//! Summary command - per-group statistics export

use super::{load_table, write_output};
use crate::cli::SummaryFormat;
use crate::error::Result;
use loopsched_core::AggregateTable;
use loopsched_csv::to_csv;
use loopsched_render::{summary_json, summary_markdown};

/// Writes the aggregate table in `format`.
pub fn summary(
    file: &str,
    delimiter: u8,
    format: SummaryFormat,
    output: Option<&str>,
) -> Result<()> {
    let table = load_table(file, delimiter)?;
    write_output(&format_summary(&table, format)?, output)
}

pub(super) fn format_summary(table: &AggregateTable, format: SummaryFormat) -> Result<String> {
    let content = match format {
        SummaryFormat::Csv => to_csv(table)?,
        SummaryFormat::Json => {
            let mut json = summary_json(table)?;
            json.push('\n');
            json
        }
        SummaryFormat::Markdown => summary_markdown(table),
    };
    Ok(content)
}
