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

//! Report command - best configuration per loop

use super::{load_table, write_output, AnalysisOptions};
use crate::cli::ReportFormat;
use crate::error::Result;
use loopsched_core::{best_config_report, BestConfigReport};
use loopsched_render::report_markdown;

/// Selects the best configuration for every configured loop and writes the
/// report.
///
/// # Errors
///
/// Fails if the input cannot be loaded or a loop has no measurements at the
/// configured thread count.
pub fn report(
    options: &AnalysisOptions,
    format: ReportFormat,
    output: Option<&str>,
) -> Result<()> {
    let table = load_table(&options.file, options.delimiter)?;
    let lines = best_config_report(&table, &options.config)?;
    write_output(&format_report(&lines, format), output)
}

pub(super) fn format_report(lines: &[BestConfigReport], format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => lines.iter().map(|line| format!("{}\n", line)).collect(),
        ReportFormat::Markdown => report_markdown(lines),
    }
}
