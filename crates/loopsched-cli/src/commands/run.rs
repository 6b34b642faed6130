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

//! Run command - report, summary and charts into one directory

use super::charts::render_charts;
use super::report::format_report;
use super::summary::format_summary;
use super::{create_dir, load_table, write_output, AnalysisOptions};
use crate::cli::{RendererKind, ReportFormat, SummaryFormat};
use crate::error::{CliError, Result};
use loopsched_core::{best_config_report, build_charts};
use std::fs;
use std::path::Path;
use tracing::info;

/// Prints the report, then writes `report.md`, `summary.csv` and every
/// chart into `out_dir`.
///
/// The report and charts are computed before anything is written, so an
/// analysis failure leaves the directory untouched.
pub fn run(options: &AnalysisOptions, out_dir: &str, renderer: RendererKind) -> Result<()> {
    let table = load_table(&options.file, options.delimiter)?;
    let lines = best_config_report(&table, &options.config)?;
    let charts = build_charts(&table, &options.config)?;

    let dir = Path::new(out_dir);
    create_dir(dir)?;

    let report_path = dir.join("report.md");
    fs::write(&report_path, format_report(&lines, ReportFormat::Markdown))
        .map_err(|e| CliError::io(&report_path, e))?;
    info!(path = %report_path.display(), "wrote report");

    let summary_path = dir.join("summary.csv");
    fs::write(&summary_path, format_summary(&table, SummaryFormat::Csv)?)
        .map_err(|e| CliError::io(&summary_path, e))?;
    info!(path = %summary_path.display(), "wrote summary");

    let chart_dir = dir.join("charts");
    let written = render_charts(&charts, &chart_dir, renderer)?;

    write_output(&format_report(&lines, ReportFormat::Text), None)?;
    println!("Wrote {} charts to {}", written.len(), chart_dir.display());
    Ok(())
}
